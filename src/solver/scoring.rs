//! Path scoring
//!
//! Letter multipliers are already baked into each tile's base points, so a path's score
//! is just the sum of tile points, doubled once if any tile carries the double-word marker.

use crate::core::Tile;

/// Score a path of tiles
///
/// Wildcard tiles contribute nothing. Several double-word tiles still only double once.
///
/// # Examples
/// ```
/// use spellcast_solver::core::{Position, Tile};
/// use spellcast_solver::solver::score_path;
///
/// let path = [
///     Tile::new(Some('a'), Position::new(0, 1)).with_double_word(true),
///     Tile::new(Some('t'), Position::new(1, 1)),
/// ];
/// assert_eq!(score_path(&path), (1 + 2) * 2);
/// ```
#[must_use]
pub fn score_path(path: &[Tile]) -> u32 {
    let total: u32 = path.iter().map(Tile::points).sum();

    if path.iter().any(Tile::is_double_word) {
        total * 2
    } else {
        total
    }
}
