//! Board graph model
//!
//! A Board owns the 25 tiles, the adjacency graph between them and the swap budget
//! for the turn. It is immutable once built; the search only ever reads it.

use super::tile::{BOARD_SIDE, LetterMultiplier, Position, TILE_COUNT, Tile};
use log::warn;
use rustc_hash::FxHashMap;
use std::fmt;

/// Swap budgets above this trigger a performance warning
pub const EXPECTED_MAX_SWAPS: u32 = 3;

/// Boundary rule used when building tile neighbourhoods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyPolicy {
    /// Full 8-connected neighbourhood with inclusive 0-based bounds
    #[default]
    Moore,
    /// Lower bound tested with `> 0` instead of `>= 0`, so row 0 and column 0 are never
    /// reported as neighbours. Kept for reproducing results of older solvers.
    Legacy,
}

impl AdjacencyPolicy {
    /// Parse a policy name ("moore" or "legacy")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "moore" => Some(Self::Moore),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }

    const fn admits(self, row: isize, col: isize) -> bool {
        let side = BOARD_SIDE as isize;
        let low = match self {
            Self::Moore => 0,
            Self::Legacy => 1,
        };
        row >= low && col >= low && row < side && col < side
    }
}

/// Error type for malformed board input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    WrongTileCount(usize),
    InvalidGemFlag(char),
    InvalidCoordinate(String),
    OverlappingMultipliers(Position),
    MisplacedTile(Position),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTileCount(count) => {
                write!(f, "Board must have exactly {TILE_COUNT} tiles, got {count}")
            }
            Self::InvalidGemFlag(c) => write!(f, "Gem flags must be 'y' or 'n', got '{c}'"),
            Self::InvalidCoordinate(text) => {
                write!(f, "Coordinate must be two numbers 0-4 like \"2 4\", got \"{text}\"")
            }
            Self::OverlappingMultipliers(pos) => {
                write!(f, "Tile {pos} cannot be both double and triple letter")
            }
            Self::MisplacedTile(pos) => {
                write!(f, "Tile at {pos} is not in reading order")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Immutable board: tiles in reading order plus their neighbour lists
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    neighbors: Vec<Vec<usize>>,
    swap_budget: u32,
    adjacency: AdjacencyPolicy,
}

impl Board {
    /// Build a board from tiles in reading order
    ///
    /// # Errors
    /// Returns `BoardError::WrongTileCount` unless exactly 25 tiles are given, and
    /// `BoardError::MisplacedTile` if a tile's position disagrees with its slot.
    pub fn new(
        tiles: Vec<Tile>,
        swap_budget: u32,
        adjacency: AdjacencyPolicy,
    ) -> Result<Self, BoardError> {
        if tiles.len() != TILE_COUNT {
            return Err(BoardError::WrongTileCount(tiles.len()));
        }

        if let Some(tile) = tiles
            .iter()
            .enumerate()
            .find_map(|(i, tile)| (tile.position() != Position::from_index(i)).then_some(tile))
        {
            return Err(BoardError::MisplacedTile(tile.position()));
        }

        if swap_budget > EXPECTED_MAX_SWAPS {
            warn!(
                "Swap budget {swap_budget} is above the usual maximum of {EXPECTED_MAX_SWAPS}; \
                 the search will be slow"
            );
        }

        Ok(Self {
            neighbors: build_graph(adjacency),
            tiles,
            swap_budget,
            adjacency,
        })
    }

    /// Build a board of plain letters from a 25-character string
    ///
    /// Letters are case-insensitive; any other character marks an unreadable tile.
    ///
    /// # Errors
    /// Returns `BoardError::WrongTileCount` unless the string has 25 characters.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::{AdjacencyPolicy, Board, Position};
    ///
    /// let board = Board::from_letters("abcdefghijklmnopqrstuvwx*", 1, AdjacencyPolicy::Moore).unwrap();
    /// assert_eq!(board.tile(Position::new(0, 2)).unwrap().letter(), Some(b'c'));
    /// assert_eq!(board.tile(Position::new(4, 4)).unwrap().letter(), None);
    /// assert_eq!(board.neighbors(Position::new(0, 0)).count(), 3);
    /// ```
    pub fn from_letters(
        letters: &str,
        swap_budget: u32,
        adjacency: AdjacencyPolicy,
    ) -> Result<Self, BoardError> {
        BoardInput::new(letters).build(swap_budget, adjacency)
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        position
            .is_on_board()
            .then(|| &self.tiles[position.index()])
    }

    /// Neighbouring tiles of `position`, in a fixed scan order
    ///
    /// Positions outside the grid have no neighbours.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = &Tile> + '_ {
        let indices: &[usize] = if position.is_on_board() {
            &self.neighbors[position.index()]
        } else {
            &[]
        };
        indices.iter().map(|&i| &self.tiles[i])
    }

    /// Neighbour indices of the tile at `index`
    #[inline]
    pub(crate) fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    #[inline]
    #[must_use]
    pub const fn swap_budget(&self) -> u32 {
        self.swap_budget
    }

    #[inline]
    #[must_use]
    pub const fn adjacency(&self) -> AdjacencyPolicy {
        self.adjacency
    }

    /// Same tiles with a different swap budget
    #[must_use]
    pub fn with_swap_budget(&self, swap_budget: u32) -> Self {
        if swap_budget > EXPECTED_MAX_SWAPS {
            warn!("Swap budget {swap_budget} is above the usual maximum of {EXPECTED_MAX_SWAPS}");
        }
        Self {
            swap_budget,
            ..self.clone()
        }
    }

    /// The adjacency graph keyed by tile
    ///
    /// Keys use tile identity, so a wildcard probe for a cell will not find the board
    /// tile that lives there.
    #[must_use]
    pub fn graph(&self) -> FxHashMap<Tile, Vec<Tile>> {
        self.tiles
            .iter()
            .map(|tile| (*tile, self.neighbors(tile.position()).copied().collect()))
            .collect()
    }

    /// Number of tiles whose letter could not be read
    #[must_use]
    pub fn unset_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.letter().is_none()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = "-".repeat(BOARD_SIDE * 2 + 1);
        writeln!(f, "{edge}")?;
        for row in self.tiles.chunks(BOARD_SIDE) {
            write!(f, "|")?;
            for tile in row {
                write!(f, "{}|", tile.to_string().to_uppercase())?;
            }
            writeln!(f)?;
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}

/// Adjacency lists indexed by reading order
///
/// Neighbours are listed row offset first then column offset, each in -1, 0, 1 order.
/// The tile itself is never its own neighbour.
#[must_use]
pub fn build_graph(policy: AdjacencyPolicy) -> Vec<Vec<usize>> {
    (0..TILE_COUNT)
        .map(|index| {
            let here = Position::from_index(index);
            let mut adjacent = Vec::with_capacity(8);
            for dr in -1..=1_isize {
                for dc in -1..=1_isize {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let row = here.row as isize + dr;
                    let col = here.col as isize + dc;
                    if policy.admits(row, col) {
                        adjacent.push(Position::new(row as usize, col as usize).index());
                    }
                }
            }
            adjacent
        })
        .collect()
}

/// Manually entered board description
///
/// Mirrors what a player reads off the screen: the letters, which tiles carry a gem,
/// and where the double-word, double-letter and triple-letter markers sit.
#[derive(Debug, Clone, Default)]
pub struct BoardInput {
    pub letters: String,
    pub gems: Option<String>,
    pub double_word: Option<Position>,
    pub double_letter: Option<Position>,
    pub triple_letter: Option<Position>,
}

impl BoardInput {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            ..Self::default()
        }
    }

    /// Turn the description into a board
    ///
    /// # Errors
    /// Returns a `BoardError` if the letter or gem strings are not 25 characters long,
    /// a gem flag is not `y`/`n`, or one tile is marked both double and triple letter.
    pub fn build(&self, swap_budget: u32, adjacency: AdjacencyPolicy) -> Result<Board, BoardError> {
        let letters: Vec<char> = self.letters.trim().chars().collect();
        if letters.len() != TILE_COUNT {
            return Err(BoardError::WrongTileCount(letters.len()));
        }

        let gems = match &self.gems {
            Some(flags) => parse_gem_flags(flags)?,
            None => vec![false; TILE_COUNT],
        };

        if let (Some(dl), Some(tl)) = (self.double_letter, self.triple_letter)
            && dl == tl
        {
            return Err(BoardError::OverlappingMultipliers(dl));
        }

        let tiles = letters
            .iter()
            .zip(gems)
            .enumerate()
            .map(|(i, (&c, gem))| {
                let position = Position::from_index(i);
                if !c.is_ascii_alphabetic() {
                    warn!("Tile {position} has no readable letter ('{c}'); it will be skipped");
                    return Tile::unset(position);
                }

                let multiplier = if Some(position) == self.triple_letter {
                    LetterMultiplier::Triple
                } else if Some(position) == self.double_letter {
                    LetterMultiplier::Double
                } else {
                    LetterMultiplier::Single
                };

                Tile::new(Some(c), position)
                    .with_multiplier(multiplier)
                    .with_gems(u32::from(gem))
                    .with_double_word(Some(position) == self.double_word)
            })
            .collect();

        Board::new(tiles, swap_budget, adjacency)
    }
}

fn parse_gem_flags(flags: &str) -> Result<Vec<bool>, BoardError> {
    let flags: Vec<char> = flags.trim().chars().collect();
    if flags.len() != TILE_COUNT {
        return Err(BoardError::WrongTileCount(flags.len()));
    }
    flags
        .into_iter()
        .map(|c| match c.to_ascii_lowercase() {
            'y' => Ok(true),
            'n' => Ok(false),
            other => Err(BoardError::InvalidGemFlag(other)),
        })
        .collect()
}

/// Parse an `"x y"` coordinate (column first, origin top-left)
///
/// Commas are accepted as separators too.
///
/// # Errors
/// Returns `BoardError::InvalidCoordinate` if the text is not two numbers in `0..5`.
///
/// # Examples
/// ```
/// use spellcast_solver::core::{Position, parse_coordinate};
///
/// assert_eq!(parse_coordinate("4 0").unwrap(), Position::new(0, 4));
/// assert!(parse_coordinate("5 5").is_err());
/// ```
pub fn parse_coordinate(text: &str) -> Result<Position, BoardError> {
    let invalid = || BoardError::InvalidCoordinate(text.to_string());
    let parts: Vec<usize> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;

    match parts.as_slice() {
        &[x, y] if x < BOARD_SIDE && y < BOARD_SIDE => Ok(Position::new(y, x)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: &str = "uuifioplgzreiilotdioaqyio";

    #[test]
    fn moore_corner_and_centre_degrees() {
        let graph = build_graph(AdjacencyPolicy::Moore);
        assert_eq!(graph[Position::new(0, 0).index()].len(), 3);
        assert_eq!(graph[Position::new(0, 2).index()].len(), 5);
        assert_eq!(graph[Position::new(2, 2).index()].len(), 8);
        assert_eq!(graph[Position::new(4, 4).index()].len(), 3);
    }

    #[test]
    fn moore_is_symmetric_and_irreflexive() {
        let graph = build_graph(AdjacencyPolicy::Moore);
        for (i, adjacent) in graph.iter().enumerate() {
            assert!(!adjacent.contains(&i));
            for &j in adjacent {
                assert!(graph[j].contains(&i), "{i} -> {j} has no reverse edge");
            }
        }
    }

    #[test]
    fn legacy_drops_top_row_and_left_column() {
        let graph = build_graph(AdjacencyPolicy::Legacy);

        // (0,0) can only reach (1,1)
        assert_eq!(graph[0], vec![Position::new(1, 1).index()]);

        // Nothing ever points into row 0 or column 0
        for adjacent in &graph {
            for &j in adjacent {
                let pos = Position::from_index(j);
                assert!(pos.row > 0 && pos.col > 0);
            }
        }

        // Interior tiles are unaffected
        assert_eq!(graph[Position::new(2, 2).index()].len(), 8);
        assert_eq!(graph[Position::new(4, 4).index()].len(), 3);
    }

    #[test]
    fn neighbour_scan_order_is_fixed() {
        let graph = build_graph(AdjacencyPolicy::Moore);
        let order: Vec<Position> = graph[Position::new(1, 1).index()]
            .iter()
            .map(|&i| Position::from_index(i))
            .collect();
        assert_eq!(order[0], Position::new(0, 0));
        assert_eq!(order[3], Position::new(1, 0));
        assert_eq!(order[4], Position::new(1, 2));
        assert_eq!(order[7], Position::new(2, 2));
    }

    #[test]
    fn from_letters_marks_unreadable_tiles() {
        let board = Board::from_letters("abcde*ghijklmnopqrstuvwx?", 0, AdjacencyPolicy::Moore)
            .unwrap();
        assert_eq!(board.unset_count(), 2);
        assert_eq!(board.tile(Position::new(1, 0)).unwrap().letter(), None);
    }

    #[test]
    fn out_of_order_tiles_rejected() {
        let mut tiles: Vec<Tile> = (0..TILE_COUNT)
            .map(|i| Tile::new(Some('a'), Position::from_index(i)))
            .collect();
        tiles.swap(0, 1);
        assert_eq!(
            Board::new(tiles, 0, AdjacencyPolicy::Moore).unwrap_err(),
            BoardError::MisplacedTile(Position::new(0, 1))
        );
    }

    #[test]
    fn graph_keyed_by_tile_identity() {
        let board = Board::from_letters(LETTERS, 0, AdjacencyPolicy::Moore).unwrap();
        let graph = board.graph();
        let centre = *board.tile(Position::new(2, 2)).unwrap();

        assert_eq!(graph.len(), TILE_COUNT);
        assert_eq!(graph[&centre].len(), 8);
        assert!(!graph.contains_key(&Tile::wildcard(b'e', Position::new(2, 2))));
    }

    #[test]
    fn wrong_length_rejected() {
        assert_eq!(
            Board::from_letters("abc", 0, AdjacencyPolicy::Moore).unwrap_err(),
            BoardError::WrongTileCount(3)
        );
    }

    #[test]
    fn off_board_positions_have_no_tile() {
        let board = Board::from_letters(LETTERS, 0, AdjacencyPolicy::Moore).unwrap();

        // (0, 7) would alias reading-order index 7
        assert!(board.tile(Position::new(0, 7)).is_none());
        assert!(board.tile(Position::new(7, 0)).is_none());
        assert_eq!(board.neighbors(Position::new(7, 0)).count(), 0);
        assert!(board.tile(Position::new(4, 4)).is_some());
    }

    #[test]
    fn board_input_applies_modifiers() {
        let input = BoardInput {
            letters: LETTERS.to_string(),
            gems: Some("yyynnnynnnynynynnnynnnyyn".to_string()),
            double_word: Some(Position::new(0, 4)),
            double_letter: Some(Position::new(1, 1)),
            triple_letter: Some(Position::new(4, 3)),
        };
        let board = input.build(2, AdjacencyPolicy::Moore).unwrap();

        let corner = board.tile(Position::new(0, 0)).unwrap();
        assert_eq!(corner.letter(), Some(b'u'));
        assert_eq!(corner.points(), 4 + 1);

        assert!(board.tile(Position::new(0, 4)).unwrap().is_double_word());
        // 'p' doubled
        assert_eq!(board.tile(Position::new(1, 1)).unwrap().base_points(), 8);
        // 'i' tripled
        assert_eq!(board.tile(Position::new(4, 3)).unwrap().base_points(), 3);
        assert_eq!(board.swap_budget(), 2);
    }

    #[test]
    fn bad_gem_flag_rejected() {
        let input = BoardInput {
            gems: Some("x".repeat(TILE_COUNT)),
            ..BoardInput::new(LETTERS)
        };
        assert_eq!(
            input.build(0, AdjacencyPolicy::Moore).unwrap_err(),
            BoardError::InvalidGemFlag('x')
        );
    }

    #[test]
    fn overlapping_letter_multipliers_rejected() {
        let pos = Position::new(2, 2);
        let input = BoardInput {
            double_letter: Some(pos),
            triple_letter: Some(pos),
            ..BoardInput::new(LETTERS)
        };
        assert!(matches!(
            input.build(0, AdjacencyPolicy::Moore),
            Err(BoardError::OverlappingMultipliers(_))
        ));
    }

    #[test]
    fn coordinate_parsing() {
        assert_eq!(parse_coordinate("3 4").unwrap(), Position::new(4, 3));
        assert_eq!(parse_coordinate("0,2").unwrap(), Position::new(2, 0));
        assert!(parse_coordinate("").is_err());
        assert!(parse_coordinate("1").is_err());
        assert!(parse_coordinate("a b").is_err());
        assert!(parse_coordinate("1 2 3").is_err());
    }

    #[test]
    fn swap_budget_override_keeps_tiles() {
        let board = Board::from_letters(LETTERS, 0, AdjacencyPolicy::Legacy).unwrap();
        let more = board.with_swap_budget(5);
        assert_eq!(more.swap_budget(), 5);
        assert_eq!(more.adjacency(), AdjacencyPolicy::Legacy);
        assert_eq!(more.tiles(), board.tiles());
    }

    #[test]
    fn display_draws_grid() {
        let board = Board::from_letters(LETTERS, 0, AdjacencyPolicy::Moore).unwrap();
        let text = board.to_string();
        assert!(text.starts_with("-----------\n|U|U|I|F|I|\n"));
        assert_eq!(text.lines().count(), 11);
    }
}
