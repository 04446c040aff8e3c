//! Main solver interface

use super::search::{SearchLimits, search};
use super::selection::{dedup, rank};
use crate::config::SolverConfig;
use crate::core::{Board, BoardError, BoardInput, Solution, Trie};
use std::time::{Duration, Instant};

/// Result of solving one board
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Top solutions, ascending by score (best last)
    pub ranked: Vec<Solution>,
    /// Solutions found before deduplication
    pub discovered: usize,
    /// Distinct `(word, score)` pairs
    pub unique: usize,
    /// Search states expanded
    pub nodes_visited: u64,
    /// Whether the deadline cut the search short
    pub timed_out: bool,
    pub duration: Duration,
}

impl SolveOutcome {
    /// The highest scoring solution, if any
    #[must_use]
    pub fn best(&self) -> Option<&Solution> {
        self.ranked.last()
    }
}

/// Main SpellCast solver
///
/// Couples a dictionary trie with a configuration and solves boards against them.
pub struct Solver<'a> {
    trie: &'a Trie,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `trie`: Dictionary of legal words
    /// - `config`: Result count, swap budget and search limits
    #[must_use]
    pub const fn new(trie: &'a Trie, config: SolverConfig) -> Self {
        Self { trie, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn trie(&self) -> &'a Trie {
        self.trie
    }

    /// Build a board using this solver's swap budget and adjacency policy
    ///
    /// # Errors
    /// Returns a `BoardError` if the input is malformed.
    pub fn board(&self, input: &BoardInput) -> Result<Board, BoardError> {
        input.build(self.config.swap_budget, self.config.adjacency)
    }

    /// Search the board and keep the top results
    ///
    /// The board's own swap budget is used, not the config's.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::config::SolverConfig;
    /// use spellcast_solver::core::{AdjacencyPolicy, Board, Trie};
    /// use spellcast_solver::solver::Solver;
    ///
    /// let trie = Trie::build(["cat", "act", "at"]);
    /// let board = Board::from_letters("cat**********************", 0, AdjacencyPolicy::Moore).unwrap();
    ///
    /// let outcome = Solver::new(&trie, SolverConfig::default()).solve(&board);
    /// assert_eq!(outcome.best().unwrap().word, "cat");
    /// assert_eq!(outcome.ranked.len(), 2);
    /// ```
    #[must_use]
    pub fn solve(&self, board: &Board) -> SolveOutcome {
        let start = Instant::now();
        let limits = SearchLimits {
            deadline: self.config.deadline,
        };

        let report = search(self.trie, board, limits);
        let discovered = report.solutions.len();
        let unique = dedup(report.solutions);
        let unique_count = unique.len();

        SolveOutcome {
            ranked: rank(unique, self.config.top_n),
            discovered,
            unique: unique_count,
            nodes_visited: report.nodes_visited,
            timed_out: report.timed_out,
            duration: start.elapsed(),
        }
    }

    /// Every distinct way the solver's dictionary words reach `word` on the board
    ///
    /// Returns an empty list if the word is not in the dictionary. Results are sorted
    /// best first, fewer swaps breaking ties.
    #[must_use]
    pub fn paths_for(&self, board: &Board, word: &str) -> Vec<Solution> {
        let word = word.to_ascii_lowercase();
        if !self.trie.contains(&word) {
            return Vec::new();
        }

        let single = Trie::build([word.as_str()]);
        let limits = SearchLimits {
            deadline: self.config.deadline,
        };
        let mut paths = search(&single, board, limits).solutions;
        paths.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.swap_count().cmp(&b.swap_count()))
        });
        paths
    }
}
