//! SpellCast solving algorithms
//!
//! The path search, scoring and ranking, plus the `Solver` that ties them together.

mod engine;
pub mod scoring;
pub mod search;
pub mod selection;

pub use engine::{SolveOutcome, Solver};
pub use scoring::score_path;
pub use search::{SearchLimits, SearchReport, search};
pub use selection::{dedup, rank, select_top};
