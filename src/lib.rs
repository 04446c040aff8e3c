//! SpellCast Solver
//!
//! Finds the highest scoring words on a 5×5 SpellCast board, optionally spending swaps
//! to replace tiles with any letter.
//!
//! # Quick Start
//!
//! ```rust
//! use spellcast_solver::config::SolverConfig;
//! use spellcast_solver::core::{AdjacencyPolicy, Board, Trie};
//! use spellcast_solver::solver::Solver;
//!
//! let trie = Trie::build(["cat", "cats", "at"]);
//! let board = Board::from_letters("catsxxxxxxxxxxxxxxxxxxxxx", 1, AdjacencyPolicy::Moore).unwrap();
//!
//! let outcome = Solver::new(&trie, SolverConfig::default()).solve(&board);
//! let best = outcome.best().unwrap();
//! println!("{} scores {}", best.word, best.score);
//! ```

// Core domain types
pub mod core;

// Start-up configuration
pub mod config;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
