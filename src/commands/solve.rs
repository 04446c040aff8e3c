//! Board solving command
//!
//! Builds a board from its description and returns the best scoring words.

use crate::core::{Board, BoardInput};
use crate::solver::{SolveOutcome, Solver};
use log::{info, warn};

/// Configuration for solving a board
pub struct SolveConfig {
    pub input: BoardInput,
    /// Overrides the solver's swap budget when set
    pub swaps: Option<u32>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(input: BoardInput) -> Self {
        Self { input, swaps: None }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub outcome: SolveOutcome,
}

/// Solve a board description with the given solver
///
/// # Errors
///
/// Returns an error if the board description is malformed (wrong tile count, bad gem
/// flags, overlapping multipliers).
pub fn solve_board(config: &SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, String> {
    let mut board = solver
        .board(&config.input)
        .map_err(|e| format!("Invalid board: {e}"))?;

    if let Some(swaps) = config.swaps {
        board = board.with_swap_budget(swaps);
    }

    let unset = board.unset_count();
    if unset > 0 {
        warn!("{unset} tiles have no letter and will not be used");
    }

    let outcome = solver.solve(&board);
    if outcome.timed_out {
        warn!("Search deadline reached; results may be incomplete");
    }
    info!(
        "Solved board with {} swaps: {} words ({} unique) in {:.2?}",
        board.swap_budget(),
        outcome.discovered,
        outcome.unique,
        outcome.duration
    );

    Ok(SolveResult { board, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::core::{Position, Trie};

    const LETTERS: &str = "catsxaexxxtsxxxxxxxxxxxxx";

    fn setup_trie() -> Trie {
        Trie::build(["cat", "cats", "at", "sat", "tea", "eat", "seat", "east"])
    }

    #[test]
    fn solve_board_finds_best_word() {
        let trie = setup_trie();
        let solver = Solver::new(&trie, SolverConfig::default());

        let result = solve_board(&SolveConfig::new(BoardInput::new(LETTERS)), &solver).unwrap();
        let best = result.outcome.best().unwrap();

        assert_eq!(best.word, "cats");
        assert_eq!(best.score, 10);
        assert!(result.outcome.ranked.len() <= 5);
    }

    #[test]
    fn swaps_override_applies() {
        let trie = setup_trie();
        let solver = Solver::new(&trie, SolverConfig::default());

        let mut config = SolveConfig::new(BoardInput::new(LETTERS));
        config.swaps = Some(2);

        let result = solve_board(&config, &solver).unwrap();
        assert_eq!(result.board.swap_budget(), 2);
    }

    #[test]
    fn double_word_marker_doubles_score() {
        let trie = setup_trie();
        let solver = Solver::new(&trie, SolverConfig::default());

        let mut input = BoardInput::new(LETTERS);
        input.double_word = Some(Position::new(0, 3));

        let result = solve_board(&SolveConfig::new(input), &solver).unwrap();
        let best = result.outcome.best().unwrap();
        assert_eq!(best.word, "cats");
        assert_eq!(best.score, 20);
    }

    #[test]
    fn malformed_board_is_an_error() {
        let trie = setup_trie();
        let solver = Solver::new(&trie, SolverConfig::default());

        let err = solve_board(&SolveConfig::new(BoardInput::new("cat")), &solver)
            .err()
            .unwrap();
        assert!(err.starts_with("Invalid board"));
    }
}
