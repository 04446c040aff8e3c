//! A word found on the board, with the path that spells it

use super::tile::{Position, Tile};
use std::fmt;

/// A scored word together with the tiles used to spell it
///
/// The path keeps wildcard annotations so renderers can show which tiles were swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub word: String,
    pub score: u32,
    pub path: Vec<Tile>,
}

impl Solution {
    /// Number of swapped letters in the path
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.path.iter().filter(|t| t.is_wildcard()).count()
    }

    /// Positions visited, in spelling order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.path.iter().map(Tile::position)
    }

    /// Swapped tiles as `(position, letter)` pairs
    pub fn swaps(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.path
            .iter()
            .filter(|t| t.is_wildcard())
            .filter_map(|t| t.letter().map(|l| (t.position(), l as char)))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pts)", self.word, self.score)
    }
}
