//! Ranking of found solutions
//!
//! Collapses solutions that spell the same word for the same score, then keeps the
//! highest scoring ones in ascending order.

use crate::core::Solution;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Drop repeated `(word, score)` pairs, keeping discovery order
///
/// The first occurrence decides where an entry sits. If a later duplicate needs fewer
/// swaps, its path replaces the kept one so renderers show the simplest route.
#[must_use]
pub fn dedup(solutions: Vec<Solution>) -> Vec<Solution> {
    let mut slots: FxHashMap<(String, u32), usize> = FxHashMap::default();
    let mut unique: Vec<Solution> = Vec::new();

    for solution in solutions {
        match slots.entry((solution.word.clone(), solution.score)) {
            Entry::Occupied(slot) => {
                let kept = &mut unique[*slot.get()];
                if solution.swap_count() < kept.swap_count() {
                    kept.path = solution.path;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(solution);
            }
        }
    }

    unique
}

/// Sort by score ascending and keep the last `n`
///
/// The sort is stable, so equal scores stay in discovery order.
#[must_use]
pub fn rank(mut solutions: Vec<Solution>, n: usize) -> Vec<Solution> {
    solutions.sort_by_key(|s| s.score);
    let start = solutions.len().saturating_sub(n);
    solutions.split_off(start)
}

/// Deduplicate then rank: the top `n` unique solutions, best last
///
/// # Examples
/// ```
/// use spellcast_solver::core::Solution;
/// use spellcast_solver::solver::select_top;
///
/// let found = |word: &str, score| Solution { word: word.to_string(), score, path: Vec::new() };
/// let top = select_top(vec![found("at", 3), found("cat", 8), found("at", 3), found("a", 1)], 2);
///
/// let words: Vec<&str> = top.iter().map(|s| s.word.as_str()).collect();
/// assert_eq!(words, vec!["at", "cat"]);
/// ```
#[must_use]
pub fn select_top(solutions: Vec<Solution>, n: usize) -> Vec<Solution> {
    rank(dedup(solutions), n)
}
