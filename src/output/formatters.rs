//! Formatting utilities for terminal output

use crate::core::{Board, Solution, Tile, letter_points};

/// How one board cell should be drawn when a solution is overlaid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Uppercase letter shown in the cell, `'.'` for unset tiles
    pub letter: char,
    /// 1-based position of the cell in the highlighted path
    pub step: Option<usize>,
    /// Whether the path swaps this cell's letter
    pub swapped: bool,
    pub double_word: bool,
    /// Letter multiplier (1, 2 or 3)
    pub multiplier: u32,
    pub gems: u32,
}

impl CellView {
    /// Short text for the cell, e.g. `C1`, `N*2` or `A`
    #[must_use]
    pub fn label(&self) -> String {
        let swap = if self.swapped { "*" } else { "" };
        match self.step {
            Some(step) => format!("{}{swap}{step}", self.letter),
            None => self.letter.to_string(),
        }
    }

    /// Multiplier and gem markers, e.g. `DW TL` or `◆`
    #[must_use]
    pub fn markers(&self) -> String {
        let mut markers = Vec::new();
        if self.double_word {
            markers.push("DW".to_string());
        }
        match self.multiplier {
            2 => markers.push("DL".to_string()),
            3 => markers.push("TL".to_string()),
            _ => {}
        }
        if self.gems > 0 {
            markers.push("◆".repeat(self.gems as usize));
        }
        markers.join(" ")
    }
}

/// Letter multiplier baked into a tile's base points
#[must_use]
pub fn multiplier_of(tile: &Tile) -> u32 {
    match tile.letter().map(letter_points) {
        Some(points) if points > 0 => tile.base_points() / points,
        _ => 1,
    }
}

/// Cells of the board in reading order, with `solution` overlaid
///
/// Swapped cells show the substituted letter rather than the board's.
///
/// # Examples
/// ```
/// use spellcast_solver::core::{AdjacencyPolicy, Board, Trie};
/// use spellcast_solver::output::formatters::cell_views;
/// use spellcast_solver::solver::Solver;
/// use spellcast_solver::config::SolverConfig;
///
/// let trie = Trie::build(["cat"]);
/// let board = Board::from_letters("catxxxxxxxxxxxxxxxxxxxxxx", 0, AdjacencyPolicy::Moore).unwrap();
/// let outcome = Solver::new(&trie, SolverConfig::default()).solve(&board);
///
/// let cells = cell_views(&board, outcome.best());
/// assert_eq!(cells[2].label(), "T3");
/// assert_eq!(cells[3].label(), "X");
/// ```
#[must_use]
pub fn cell_views(board: &Board, solution: Option<&Solution>) -> Vec<CellView> {
    let mut cells: Vec<CellView> = board
        .tiles()
        .iter()
        .map(|tile| CellView {
            letter: tile.letter().map_or('.', |l| l.to_ascii_uppercase() as char),
            step: None,
            swapped: false,
            double_word: tile.is_double_word(),
            multiplier: multiplier_of(tile),
            gems: tile.bonus_points(),
        })
        .collect();

    if let Some(solution) = solution {
        for (i, tile) in solution.path.iter().enumerate() {
            let Some(cell) = cells.get_mut(tile.position().index()) else {
                continue;
            };
            cell.step = Some(i + 1);
            if tile.is_wildcard() {
                cell.swapped = true;
                if let Some(letter) = tile.letter() {
                    cell.letter = letter.to_ascii_uppercase() as char;
                }
            }
        }
    }

    cells
}

/// The path as `C(0, 0) → A(0, 1)`, swapped letters marked with `*`
#[must_use]
pub fn format_path(solution: &Solution) -> String {
    solution
        .path
        .iter()
        .map(|tile| {
            let swap = if tile.is_wildcard() { "*" } else { "" };
            format!("{}{swap}{}", tile.to_string().to_uppercase(), tile.position())
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Swaps as `(1, 1)→N`, or `none`
#[must_use]
pub fn format_swaps(solution: &Solution) -> String {
    let swaps: Vec<String> = solution
        .swaps()
        .map(|(position, letter)| format!("{position}→{}", letter.to_ascii_uppercase()))
        .collect();

    if swaps.is_empty() {
        "none".to_string()
    } else {
        swaps.join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
