//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_board, run_benchmark};
pub use simple::{ManualBoard, read_board, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_board};
