//! Benchmark command
//!
//! Tests solver performance across randomly generated boards.

use crate::core::{BoardInput, Position, TILE_COUNT};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Letters drawn for random boards, weighted roughly by English frequency
const LETTER_BAG: &[u8] =
    b"aaaaaaaaabbccddddeeeeeeeeeeeeffggghhiiiiiiiiijkllllmmnnnnnnooooooooppqrrrrrrssssttttttuuuuvvwwxyyz";

/// Chance that a random tile carries a gem
const GEM_CHANCE: f64 = 0.2;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub boards: usize,
    /// Random seed; a fresh one is drawn when unset
    pub seed: Option<u64>,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub seed: u64,
    pub swap_budget: u32,
    /// Solutions found across all boards, before deduplication
    pub total_found: usize,
    pub average_best_score: f64,
    pub min_best_score: u32,
    /// Highest scoring word seen and the board it was found on
    pub best: Option<(String, u32, String)>,
    /// Boards grouped by the length of their best word
    pub length_distribution: BTreeMap<usize, usize>,
    pub timed_out: usize,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate a random board description
///
/// Places one double-word marker and one letter multiplier, and scatters gems.
pub fn random_board<R: Rng>(rng: &mut R) -> BoardInput {
    let letters: String = (0..TILE_COUNT)
        .map(|_| LETTER_BAG[rng.random_range(0..LETTER_BAG.len())] as char)
        .collect();
    let gems: String = (0..TILE_COUNT)
        .map(|_| if rng.random_bool(GEM_CHANCE) { 'y' } else { 'n' })
        .collect();

    let mut input = BoardInput::new(letters);
    input.gems = Some(gems);
    input.double_word = Some(Position::from_index(rng.random_range(0..TILE_COUNT)));

    let multiplier = Some(Position::from_index(rng.random_range(0..TILE_COUNT)));
    if rng.random_bool(0.5) {
        input.double_letter = multiplier;
    } else {
        input.triple_letter = multiplier;
    }
    input
}

/// Run the solver on a series of random boards
///
/// The same seed always produces the same boards, so runs can be compared.
///
/// # Errors
///
/// Returns an error if a generated board cannot be built.
pub fn run_benchmark(config: &BenchmarkConfig, solver: &Solver<'_>) -> Result<BenchmarkResult, String> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    info!("Benchmarking {} boards with seed {seed}", config.boards);

    let pb = ProgressBar::new(config.boards as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_found = 0;
    let mut total_best = 0u64;
    let mut min_best_score = u32::MAX;
    let mut best: Option<(String, u32, String)> = None;
    let mut length_distribution = BTreeMap::new();
    let mut timed_out = 0;

    for _ in 0..config.boards {
        let input = random_board(&mut rng);
        let board = solver.board(&input).map_err(|e| format!("Generated bad board: {e}"))?;
        let outcome = solver.solve(&board);

        total_found += outcome.discovered;
        if outcome.timed_out {
            timed_out += 1;
        }

        let (word, score) = outcome
            .best()
            .map_or((String::new(), 0), |s| (s.word.clone(), s.score));
        debug!("{}: best {word} ({score})", input.letters);

        total_best += u64::from(score);
        min_best_score = min_best_score.min(score);
        *length_distribution.entry(word.len()).or_insert(0) += 1;

        if best.as_ref().is_none_or(|(_, top, _)| score > *top) {
            pb.set_message(format!("best: {word} ({score})"));
            best = Some((word, score, input.letters));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let boards = config.boards;

    Ok(BenchmarkResult {
        boards,
        seed,
        swap_budget: solver.config().swap_budget,
        total_found,
        average_best_score: if boards == 0 {
            0.0
        } else {
            total_best as f64 / boards as f64
        },
        min_best_score: if boards == 0 { 0 } else { min_best_score },
        best,
        length_distribution,
        timed_out,
        duration,
        boards_per_second: if boards == 0 || duration.is_zero() {
            0.0
        } else {
            boards as f64 / duration.as_secs_f64()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::core::{AdjacencyPolicy, Trie};
    use crate::wordlists::WORDS;

    fn config(boards: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            boards,
            seed: Some(seed),
        }
    }

    #[test]
    fn random_boards_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let input = random_board(&mut rng);
            assert_eq!(input.letters.len(), TILE_COUNT);
            assert!(input.letters.bytes().all(|b| b.is_ascii_lowercase()));
            assert!(input.build(0, AdjacencyPolicy::Moore).is_ok());
        }
    }

    #[test]
    fn same_seed_same_boards() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_board(&mut a).letters, random_board(&mut b).letters);
    }

    #[test]
    fn benchmark_runs() {
        let trie = Trie::build(WORDS);
        let solver = Solver::new(&trie, SolverConfig::default());

        let result = run_benchmark(&config(5, 1), &solver).unwrap();
        assert_eq!(result.boards, 5);
        assert_eq!(result.seed, 1);
        assert_eq!(result.length_distribution.values().sum::<usize>(), 5);
        assert!(result.average_best_score >= f64::from(result.min_best_score));
    }

    #[test]
    fn benchmark_is_reproducible() {
        let trie = Trie::build(WORDS);
        let solver = Solver::new(&trie, SolverConfig::default());

        let first = run_benchmark(&config(3, 99), &solver).unwrap();
        let second = run_benchmark(&config(3, 99), &solver).unwrap();
        assert_eq!(first.total_found, second.total_found);
        assert_eq!(first.best, second.best);
    }

    #[test]
    fn benchmark_no_boards() {
        let trie = Trie::build(WORDS);
        let solver = Solver::new(&trie, SolverConfig::default());

        let result = run_benchmark(&config(0, 3), &solver).unwrap();
        assert_eq!(result.total_found, 0);
        assert!(result.best.is_none());
        assert_eq!(result.min_best_score, 0);
        assert!(result.boards_per_second.is_finite());
        assert!(result.average_best_score.abs() < f64::EPSILON);
    }
}
