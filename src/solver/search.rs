//! Trie-constrained path search over the board graph
//!
//! Depth-first backtracking from every readable tile. At each step a neighbour can be
//! taken as printed (if the trie continues with its letter) or, while swaps remain,
//! replaced by any letter the trie continues with. Branch state travels by value: the
//! visited set is a 25-bit mask and the swap count is a plain integer, so sibling
//! branches never see each other's choices and roots can run on separate threads.

use super::scoring::score_path;
use crate::core::{Board, NodeId, Solution, TILE_COUNT, Tile, Trie};
use log::debug;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Optional limits on a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop expanding branches once this much time has passed
    pub deadline: Option<Duration>,
}

/// Everything the search produced
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Every solution in discovery order, duplicates included
    pub solutions: Vec<Solution>,
    /// Number of (tile, trie node) states expanded
    pub nodes_visited: u64,
    /// Whether the deadline cut the search short
    pub timed_out: bool,
}

/// Visited tiles as a bit per reading-order index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Visited(u32);

impl Visited {
    const fn only(index: usize) -> Self {
        Self(1 << index)
    }

    const fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    const fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }
}

const _: () = assert!(TILE_COUNT <= u32::BITS as usize);

/// Per-root output, merged in root order afterwards
#[derive(Default)]
struct RootResult {
    found: Vec<Solution>,
    nodes: u64,
    timed_out: bool,
}

struct Search<'a> {
    trie: &'a Trie,
    board: &'a Board,
    cutoff: Option<Instant>,
}

/// Find every dictionary word reachable on the board
///
/// Roots are searched in parallel and their results concatenated in reading order, so
/// the output order is the same as a sequential search. Duplicates (the same word
/// reached along different paths) are kept.
///
/// # Examples
/// ```
/// use spellcast_solver::core::{AdjacencyPolicy, Board, Trie};
/// use spellcast_solver::solver::{SearchLimits, search};
///
/// let board = Board::from_letters("cat**********************", 0, AdjacencyPolicy::Moore).unwrap();
/// let trie = Trie::build(["cat", "act", "dog"]);
///
/// let report = search(&trie, &board, SearchLimits::default());
/// let words: Vec<&str> = report.solutions.iter().map(|s| s.word.as_str()).collect();
/// assert_eq!(words, vec!["cat"]);
/// ```
#[must_use]
pub fn search(trie: &Trie, board: &Board, limits: SearchLimits) -> SearchReport {
    let engine = Search {
        trie,
        board,
        cutoff: limits.deadline.map(|d| Instant::now() + d),
    };

    let per_root: Vec<RootResult> = (0..TILE_COUNT)
        .into_par_iter()
        .map(|index| engine.from_root(index))
        .collect();

    let mut report = SearchReport::default();
    for root in per_root {
        report.nodes_visited += root.nodes;
        report.timed_out |= root.timed_out;
        report.solutions.extend(root.found);
    }

    debug!(
        "Search visited {} nodes and found {} solutions (swaps: {}, timed out: {})",
        report.nodes_visited,
        report.solutions.len(),
        board.swap_budget(),
        report.timed_out
    );

    report
}

impl Search<'_> {
    fn from_root(&self, index: usize) -> RootResult {
        let mut result = RootResult::default();
        let tile = self.board.tiles()[index];

        // Roots are always taken literally
        let Some(node) = tile
            .letter()
            .and_then(|letter| self.trie.child(self.trie.root(), letter))
        else {
            return result;
        };

        let mut path = Vec::with_capacity(TILE_COUNT);
        path.push(tile);
        self.extend(
            node,
            index,
            Visited::only(index),
            self.board.swap_budget(),
            &mut path,
            &mut result,
        );
        result
    }

    fn expired(&self) -> bool {
        self.cutoff.is_some_and(|cutoff| Instant::now() >= cutoff)
    }

    /// Expand the branch ending at tile `index` with trie position `node`
    ///
    /// `path` is pushed and popped around each child so it always equals the branch's
    /// own path on entry and exit.
    fn extend(
        &self,
        node: NodeId,
        index: usize,
        visited: Visited,
        swaps_left: u32,
        path: &mut Vec<Tile>,
        result: &mut RootResult,
    ) {
        result.nodes += 1;

        if self.expired() {
            result.timed_out = true;
        } else {
            for &next in self.board.neighbor_indices(index) {
                if visited.contains(next) {
                    continue;
                }

                let neighbor = self.board.tiles()[next];
                // Unreadable tiles can be neither read nor swapped
                let Some(printed) = neighbor.letter() else {
                    continue;
                };
                let visited = visited.with(next);

                if swaps_left > 0 {
                    for (letter, child) in self.trie.children(node) {
                        path.push(Tile::wildcard(letter, neighbor.position()));
                        self.extend(child, next, visited, swaps_left - 1, path, result);
                        path.pop();
                    }
                }

                if let Some(child) = self.trie.child(node, printed) {
                    path.push(neighbor);
                    self.extend(child, next, visited, swaps_left, path, result);
                    path.pop();
                }
            }
        }

        if self.trie.is_terminal(node) {
            result.found.push(solution_from(path));
        }
    }
}

fn solution_from(path: &[Tile]) -> Solution {
    let word = path
        .iter()
        .filter_map(Tile::letter)
        .map(char::from)
        .collect();

    Solution {
        word,
        score: score_path(path),
        path: path.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AdjacencyPolicy, Position};
    use rustc_hash::FxHashSet;

    /// 'c' (0,0), 'a' (0,1), 't' (1,1), everything else unreadable
    const CAT_BOARD: &str = "ca*** *t*** ***** ***** *****";

    fn board(letters: &str, swaps: u32) -> Board {
        let letters: String = letters.split_whitespace().collect();
        Board::from_letters(&letters, swaps, AdjacencyPolicy::Moore).unwrap()
    }

    fn run(words: &[&str], board: &Board) -> Vec<Solution> {
        search(&Trie::build(words), board, SearchLimits::default()).solutions
    }

    fn literal_only(trie: &Trie, board: &Board) -> FxHashSet<(String, u32, Vec<Position>)> {
        fn walk(
            trie: &Trie,
            board: &Board,
            node: NodeId,
            path: &mut Vec<Tile>,
            out: &mut FxHashSet<(String, u32, Vec<Position>)>,
        ) {
            let last = path[path.len() - 1].position();
            let next: Vec<Tile> = board.neighbors(last).copied().collect();
            for tile in next {
                if path.iter().any(|t| t.position() == tile.position()) {
                    continue;
                }
                if let Some(child) = tile.letter().and_then(|l| trie.child(node, l)) {
                    path.push(tile);
                    walk(trie, board, child, path, out);
                    path.pop();
                }
            }
            if trie.is_terminal(node) {
                let s = solution_from(path);
                out.insert((s.word.clone(), s.score, s.positions().collect()));
            }
        }

        let mut out = FxHashSet::default();
        for tile in board.tiles() {
            if let Some(node) = tile.letter().and_then(|l| trie.child(trie.root(), l)) {
                walk(trie, board, node, &mut vec![*tile], &mut out);
            }
        }
        out
    }

    #[test]
    fn finds_cat() {
        let found = run(&["cat"], &board(CAT_BOARD, 0));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "cat");
        assert_eq!(found[0].score, 8);
        assert_eq!(
            found[0].positions().collect::<Vec<_>>(),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn unreadable_tile_breaks_path() {
        let found = run(&["cat"], &board("c**** *t*** ***** ***** *****", 0));
        assert!(found.is_empty());
    }

    #[test]
    fn unreadable_tile_cannot_be_swapped() {
        let found = run(&["cat"], &board("c**** *t*** ***** ***** *****", 3));
        assert!(found.iter().all(|s| s.positions().all(|p| p != Position::new(0, 1))));
        assert!(found.iter().all(|s| s.word != "cat" || s.swap_count() > 0));
    }

    #[test]
    fn double_word_doubles_score() {
        let letters = ".a... .t... ..... ..... .....";
        let mut tiles: Vec<Tile> = board(letters, 0).tiles().to_vec();
        tiles[1] = tiles[1].with_double_word(true);
        let board = Board::new(tiles, 0, AdjacencyPolicy::Moore).unwrap();

        let found = run(&["at"], &board);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score, 6);
    }

    #[test]
    fn wildcard_substitutes_neighbour() {
        // 'a' at (0,0), unreadable (0,1), unrelated 'x' at (1,0)
        let found = run(&["an"], &board("a.... x.... ..... ..... .....", 1));

        assert_eq!(found.len(), 1);
        let an = &found[0];
        assert_eq!(an.word, "an");
        assert_eq!(an.score, 1);
        assert_eq!(an.swap_count(), 1);
        assert_eq!(an.path[1].position(), Position::new(1, 0));
        assert!(an.path[1].is_wildcard());
    }

    #[test]
    fn zero_budget_disables_wildcards() {
        let found = run(&["an"], &board("a.... x.... ..... ..... .....", 0));
        assert!(found.is_empty());
    }

    #[test]
    fn roots_are_never_swapped() {
        // Only a swapped root could spell "ba"
        let found = run(&["ba"], &board("a.... x.... ..... ..... .....", 2));
        assert!(found.is_empty());
    }

    #[test]
    fn literal_and_wildcard_both_explored() {
        // 'a' next to 't': "at" can be read literally or by swapping 't' for 't'
        let found = run(&["at"], &board("at... ..... ..... ..... .....", 1));
        let scores: Vec<(u32, usize)> = found.iter().map(|s| (s.score, s.swap_count())).collect();

        assert!(scores.contains(&(3, 0)));
        assert!(scores.contains(&(1, 1)));
    }

    #[test]
    fn duplicates_are_kept() {
        // Two 'a' tiles next to one 't' give two paths for "at"
        let found = run(&["at"], &board("ata.. ..... ..... ..... .....", 0));
        assert_eq!(found.iter().filter(|s| s.word == "at").count(), 2);
    }

    #[test]
    fn longer_words_found_before_their_prefixes() {
        let found = run(&["at", "ate"], &board("ate.. ..... ..... ..... .....", 0));
        let words: Vec<&str> = found.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["ate", "at"]);
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(run(&[], &board(CAT_BOARD, 2)).is_empty());
        assert!(run(&["cat"], &board("..... ..... ..... ..... .....", 2)).is_empty());
    }

    #[test]
    fn swap_only_spends_budget_on_used_tiles() {
        let found = run(&["cot", "cat"], &board(CAT_BOARD, 1));
        let cot: Vec<&Solution> = found.iter().filter(|s| s.word == "cot").collect();

        assert!(!cot.is_empty());
        for s in cot {
            assert_eq!(s.swap_count(), 1);
            assert_eq!(s.score, 5 + 2);
        }
    }

    #[test]
    fn invariants_hold_on_dense_board() {
        let words = [
            "tea", "eat", "ate", "seat", "east", "tease", "state", "taste", "set", "sat",
            "rat", "tar", "star", "rest", "stare", "treat", "tears", "rates",
        ];
        let trie = Trie::build(words);
        let board = board("state aseta treat easts ratse", 2);

        let report = search(&trie, &board, SearchLimits::default());
        assert!(!report.solutions.is_empty());
        assert!(!report.timed_out);

        for s in &report.solutions {
            let positions: FxHashSet<Position> = s.positions().collect();
            assert_eq!(positions.len(), s.path.len(), "{} reuses a tile", s.word);
            assert!(s.swap_count() <= 2);
            assert_eq!(score_path(&s.path), s.score);
            assert!(trie.contains(&s.word));
        }
    }

    #[test]
    fn zero_budget_matches_literal_search() {
        let trie = Trie::build(["tea", "eat", "seat", "east", "taste", "state", "sets", "tests"]);
        let board = board("state aseta treat easts ratse", 0);

        let found: FxHashSet<(String, u32, Vec<Position>)> = search(&trie, &board, SearchLimits::default())
            .solutions
            .into_iter()
            .map(|s| {
                let positions = s.positions().collect();
                (s.word, s.score, positions)
            })
            .collect();

        assert_eq!(found, literal_only(&trie, &board));
    }

    #[test]
    fn output_order_is_deterministic() {
        let trie = Trie::build(["tea", "eat", "ate", "seat", "east", "set"]);
        let board = board("state aseta treat easts ratse", 1);

        let first = search(&trie, &board, SearchLimits::default()).solutions;
        let second = search(&trie, &board, SearchLimits::default()).solutions;
        assert_eq!(first, second);
        let words = |v: &[Solution]| v.iter().map(|s| s.word.clone()).collect::<Vec<_>>();
        assert_eq!(words(&first), words(&second));
    }

    #[test]
    fn elapsed_deadline_stops_expansion() {
        let trie = Trie::build(["tea", "eat", "seat", "east"]);
        let board = board("state aseta treat easts ratse", 3);
        let limits = SearchLimits {
            deadline: Some(Duration::ZERO),
        };

        let report = search(&trie, &board, limits);
        assert!(report.timed_out);
        // Only root expansions happen, and single letters are not words here
        assert!(report.solutions.is_empty());
    }
}
