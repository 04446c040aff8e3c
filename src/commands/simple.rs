//! Simple interactive CLI mode
//!
//! Prompts for a board the way a player reads it off the screen, then solves it.

use super::solve::{SolveConfig, solve_board};
use crate::core::{BoardInput, EXPECTED_MAX_SWAPS, Position, TILE_COUNT, parse_coordinate};
use crate::output::print_solve_result;
use crate::solver::Solver;
use std::io::{self, BufRead, Write};

/// A board description entered at the prompt
pub struct ManualBoard {
    pub input: BoardInput,
    pub swaps: u32,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails, or if input
/// ends before a board is complete.
pub fn run_simple(solver: &Solver<'_>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             SpellCast Solver - Manual Board Entry            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        let manual = read_board(&mut input, &mut out)?;

        let mut config = SolveConfig::new(manual.input);
        config.swaps = Some(manual.swaps);

        match solve_board(&config, solver) {
            Ok(result) => print_solve_result(&result),
            Err(e) => println!("❌ {e}\n"),
        }

        let again = prompt(&mut input, &mut out, "Solve another board? (yes/no)")?;
        if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
            println!("\n👋 Good luck!\n");
            return Ok(());
        }
        println!();
    }
}

/// Read a complete board description, re-asking after invalid answers
///
/// # Errors
///
/// Returns an error on I/O failure or if input ends early.
pub fn read_board<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<ManualBoard, String> {
    let swaps = loop {
        let answer = prompt(input, out, "How many swaps can you perform")?;
        match answer.parse::<u32>() {
            Ok(n) => {
                if n > EXPECTED_MAX_SWAPS {
                    say(
                        out,
                        "⚠ More than three swaps should not be possible. Continuing, but this will be slow.",
                    )?;
                }
                break n;
            }
            Err(_) => say(out, "❌ Enter a whole number")?,
        }
    };

    say(out, "All inputs are read left to right, top to bottom, with no separators.")?;
    let letters = loop {
        let answer = prompt(input, out, "Enter all 25 letters on the board")?;
        let count = answer.chars().count();
        if count == TILE_COUNT {
            break answer;
        }
        say(out, &format!("❌ Expected {TILE_COUNT} letters, got {count}"))?;
    };

    let gems = loop {
        let answer = prompt(input, out, "y if a gem is present, n otherwise, for all 25 tiles")?;
        if answer.is_empty() {
            break None;
        }
        let valid = answer.chars().count() == TILE_COUNT
            && answer.chars().all(|c| matches!(c.to_ascii_lowercase(), 'y' | 'n'));
        if valid {
            break Some(answer);
        }
        say(out, &format!("❌ Expected {TILE_COUNT} y/n flags (or blank for none)"))?;
    };

    say(out, "For X and Y coordinates, the origin is the top left tile, e.g. (2 4).")?;
    say(out, "Leave blank if not present.")?;
    let double_word = read_coordinate(input, out, "Coordinate of double word tile")?;
    let triple_letter = read_coordinate(input, out, "Coordinate of triple letter tile")?;
    let double_letter = loop {
        let position = read_coordinate(input, out, "Coordinate of double letter tile")?;
        if position.is_none() || position != triple_letter {
            break position;
        }
        say(out, "❌ A tile cannot be both double and triple letter")?;
    };

    Ok(ManualBoard {
        input: BoardInput {
            letters,
            gems,
            double_word,
            double_letter,
            triple_letter,
        },
        swaps,
    })
}

fn read_coordinate<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<Position>, String> {
    loop {
        let answer = prompt(input, out, label)?;
        if answer.is_empty() {
            return Ok(None);
        }
        match parse_coordinate(&answer) {
            Ok(position) => return Ok(Some(position)),
            Err(e) => say(out, &format!("❌ {e}"))?,
        }
    }
}

/// Ask a question and return the trimmed answer
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String, String> {
    write!(out, "{label}: ").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input ended before the board was complete".to_string());
    }

    Ok(line.trim().to_string())
}

fn say<W: Write>(out: &mut W, message: &str) -> Result<(), String> {
    writeln!(out, "{message}").map_err(|e| e.to_string())
}
