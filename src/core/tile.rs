//! Grid tiles and the letter point table
//!
//! A Tile is one cell of the 5×5 board. Its point value is fixed at creation time
//! (letter value × letter multiplier), so scoring never re-applies multipliers.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Side length of the square board
pub const BOARD_SIDE: usize = 5;

/// Number of tiles on the board
pub const TILE_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Letter values indexed by `letter - b'a'`
const LETTER_POINTS: [u32; 26] = [
    1, 4, 5, 3, 1, 5, 3, 4, 1, 7, 6, 3, 4, 2, 1, 4, 8, 2, 2, 2, 4, 5, 5, 7, 4, 8,
];

/// Point value of a single letter
///
/// Anything outside `a..=z` is worth nothing.
///
/// # Examples
/// ```
/// use spellcast_solver::core::letter_points;
///
/// assert_eq!(letter_points(b'c'), 5);
/// assert_eq!(letter_points(b'z'), 8);
/// assert_eq!(letter_points(b'?'), 0);
/// ```
#[inline]
#[must_use]
pub const fn letter_points(letter: u8) -> u32 {
    if letter.is_ascii_lowercase() {
        LETTER_POINTS[(letter - b'a') as usize]
    } else {
        0
    }
}

/// A grid coordinate, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the `index`-th tile in reading order (left to right, top to bottom)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIDE,
            col: index % BOARD_SIDE,
        }
    }

    /// Whether the position lies inside the grid
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIDE && self.col < BOARD_SIDE
    }

    /// Reading-order index of this position
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * BOARD_SIDE + self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Letter multiplier printed on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterMultiplier {
    #[default]
    Single,
    Double,
    Triple,
}

impl LetterMultiplier {
    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// A single board cell, or a hypothetical swapped letter used during search
///
/// Identity is `(position, is_wildcard)`: two wildcards on the same cell compare equal
/// even when they carry different letters. A board tile and a wildcard on the same
/// cell are distinct.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    letter: Option<u8>,
    base_points: u32,
    bonus_points: u32,
    double_word: bool,
    position: Position,
    wildcard: bool,
}

impl Tile {
    /// Create a plain board tile
    ///
    /// `letter` is lowercased; anything that is not an ASCII letter leaves the tile unset.
    #[must_use]
    pub fn new(letter: Option<char>, position: Position) -> Self {
        let letter = letter
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase() as u8);

        Self {
            letter,
            base_points: letter.map_or(0, letter_points),
            bonus_points: 0,
            double_word: false,
            position,
            wildcard: false,
        }
    }

    /// A tile whose letter could not be read
    #[must_use]
    pub const fn unset(position: Position) -> Self {
        Self {
            letter: None,
            base_points: 0,
            bonus_points: 0,
            double_word: false,
            position,
            wildcard: false,
        }
    }

    /// A swapped-in letter: always worth zero and never doubles the word
    #[must_use]
    pub const fn wildcard(letter: u8, position: Position) -> Self {
        Self {
            letter: Some(letter),
            base_points: 0,
            bonus_points: 0,
            double_word: false,
            position,
            wildcard: true,
        }
    }

    /// Apply a letter multiplier to the base points
    #[must_use]
    pub const fn with_multiplier(mut self, multiplier: LetterMultiplier) -> Self {
        if !self.wildcard {
            self.base_points *= multiplier.factor();
        }
        self
    }

    /// Add gem bonus points
    #[must_use]
    pub const fn with_gems(mut self, gems: u32) -> Self {
        if !self.wildcard {
            self.bonus_points += gems;
        }
        self
    }

    #[must_use]
    pub const fn with_double_word(mut self, double_word: bool) -> Self {
        self.double_word = double_word && !self.wildcard;
        self
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn base_points(&self) -> u32 {
        self.base_points
    }

    #[inline]
    #[must_use]
    pub const fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    #[inline]
    #[must_use]
    pub const fn is_double_word(&self) -> bool {
        self.double_word
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Points contributed to a word before any word multiplier
    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.base_points + self.bonus_points
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.wildcard == other.wildcard
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.wildcard.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter {
            Some(letter) => write!(f, "{}", letter as char),
            None => write!(f, "*"),
        }
    }
}
