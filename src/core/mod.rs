//! Core domain types for SpellCast boards
//!
//! Tiles, the board graph, the prefix trie and found solutions. Everything here is
//! immutable once built and cheap to share between search threads.

mod board;
mod solution;
mod tile;
mod trie;

pub use board::{
    AdjacencyPolicy, Board, BoardError, BoardInput, EXPECTED_MAX_SWAPS, build_graph,
    parse_coordinate,
};
pub use solution::Solution;
pub use tile::{BOARD_SIDE, LetterMultiplier, Position, TILE_COUNT, Tile, letter_points};
pub use trie::{NodeId, Trie};
