//! Word analysis command
//!
//! Lists every way a single word can be spelled on the board.

use crate::core::{Board, Solution};
use crate::solver::Solver;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Every path spelling the word, best first
    pub paths: Vec<Solution>,
    pub swap_budget: u32,
}

impl AnalysisResult {
    /// The highest scoring path, if the word can be spelled at all
    #[must_use]
    pub fn best(&self) -> Option<&Solution> {
        self.paths.first()
    }

    /// Paths that use no swaps
    pub fn literal_paths(&self) -> impl Iterator<Item = &Solution> {
        self.paths.iter().filter(|s| s.swap_count() == 0)
    }
}

/// Find all paths spelling `word` on the board
///
/// A word the dictionary knows but the board cannot spell gives an empty result.
///
/// # Errors
///
/// Returns an error if:
/// - The word is empty or contains non-letters
/// - The word is not in the solver's dictionary
pub fn analyze_word(word: &str, board: &Board, solver: &Solver<'_>) -> Result<AnalysisResult, String> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("Invalid word '{word}': only letters a-z are allowed"));
    }

    let word = word.to_ascii_lowercase();
    if !solver.trie().contains(&word) {
        return Err(format!("Word '{word}' not in dictionary"));
    }

    Ok(AnalysisResult {
        paths: solver.paths_for(board, &word),
        word,
        swap_budget: board.swap_budget(),
    })
}
