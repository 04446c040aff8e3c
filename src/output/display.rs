//! Display functions for command results

use super::formatters::{CellView, cell_views, create_progress_bar, format_path, format_swaps};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{BOARD_SIDE, Board, Solution};
use colored::{ColoredString, Colorize};

fn colored_cell(cell: &CellView) -> ColoredString {
    let text = format!("{:^5}", cell.label());
    if cell.swapped {
        text.bright_magenta().bold()
    } else if cell.step.is_some() {
        text.bright_green().bold()
    } else if cell.letter == '.' {
        text.bright_black()
    } else {
        text.white()
    }
}

/// Print the board with `solution` overlaid
///
/// Path tiles are numbered in spelling order; swapped tiles show their new letter in
/// magenta with a `*`. Bonus tiles are listed underneath.
pub fn print_board(board: &Board, solution: Option<&Solution>) {
    let cells = cell_views(board, solution);
    let edge = "─".repeat(BOARD_SIDE * 5 + 2);

    println!("  {}", edge.bright_black());
    for row in cells.chunks(BOARD_SIDE) {
        print!("  {}", "│".bright_black());
        for cell in row {
            print!("{}", colored_cell(cell));
        }
        println!("{}", "│".bright_black());
    }
    println!("  {}", edge.bright_black());

    let bonuses: Vec<String> = cells
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| {
            let markers = cell.markers();
            (!markers.is_empty())
                .then(|| format!("{markers} ({}, {})", i / BOARD_SIDE, i % BOARD_SIDE))
        })
        .collect();
    if !bonuses.is_empty() {
        println!("  {}", bonuses.join("  ").bright_black());
    }
}

fn print_solution_line(rank: usize, solution: &Solution) {
    let swaps = if solution.swap_count() == 0 {
        String::new()
    } else {
        format!("  swaps: {}", format_swaps(solution))
    };
    println!(
        "  {:>2}. {:<12} {:>4} pts{}",
        rank.to_string().bright_black(),
        solution.word.to_uppercase().bright_white().bold(),
        solution.score.to_string().bright_yellow(),
        swaps.bright_magenta()
    );
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult) {
    let outcome = &result.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving board with {} {}",
        result.board.swap_budget().to_string().bright_yellow().bold(),
        if result.board.swap_budget() == 1 {
            "swap"
        } else {
            "swaps"
        }
    );
    println!("{}", "─".repeat(60).cyan());

    let Some(best) = outcome.best() else {
        print_board(&result.board, None);
        println!("\n{}", "❌ No words found on this board".red().bold());
        return;
    };

    println!();
    print_board(&result.board, Some(best));
    println!("\n  {}", format_path(best).bright_black());

    println!("\n🏆 {}", "Top words:".bright_cyan().bold());
    for (i, solution) in outcome.ranked.iter().rev().enumerate() {
        print_solution_line(i + 1, solution);
    }

    println!(
        "\n  {} found, {} unique, {} states in {:.2?}",
        outcome.discovered, outcome.unique, outcome.nodes_visited, outcome.duration
    );
    if outcome.timed_out {
        println!("  {}", "⚠ Deadline reached; results may be incomplete".yellow());
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult, board: &Board) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let Some(best) = result.best() else {
        println!(
            "\n{}",
            format!(
                "❌ '{}' cannot be spelled on this board with {} swaps",
                result.word, result.swap_budget
            )
            .red()
        );
        return;
    };

    println!(
        "\n📊 {} paths, {} without swaps",
        result.paths.len(),
        result.literal_paths().count()
    );
    println!();
    print_board(board, Some(best));

    for (i, solution) in result.paths.iter().enumerate() {
        print_solution_line(i + 1, solution);
        println!("      {}", format_path(solution).bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!("   Seed:             {}", result.seed);
    println!("   Swaps:            {}", result.swap_budget);
    println!("   Words found:      {}", result.total_found);
    println!(
        "   Average best:     {}",
        format!("{:.2}", result.average_best_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Lowest best:      {}",
        result.min_best_score.to_string().yellow()
    );
    if let Some((word, score, letters)) = &result.best {
        println!(
            "   Highest:          {} ({}) on {}",
            word.to_uppercase().green().bold(),
            score,
            letters.bright_black()
        );
    }
    if result.timed_out > 0 {
        println!("   Timed out:        {}", result.timed_out.to_string().red());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.boards == 0 {
        return;
    }

    println!("\n📈 {}", "Best word length:".bright_cyan().bold());
    for (&length, &count) in &result.length_distribution {
        let pct = (count as f64 / result.boards as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
