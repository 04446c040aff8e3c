//! TUI application state and logic

use crate::core::{Board, EXPECTED_MAX_SWAPS, Solution};
use crate::solver::{SolveOutcome, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub board: Board,
    pub outcome: SolveOutcome,
    /// Index into the solutions, best first
    pub selected: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and solve the board once
    #[must_use]
    pub fn new(solver: Solver<'a>, board: Board) -> Self {
        let outcome = solver.solve(&board);

        let mut app = Self {
            solver,
            board,
            outcome,
            selected: 0,
            messages: vec![Message {
                text: "↑/↓ pick a word, +/- change swaps, q quits".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        };
        app.report_outcome();
        app
    }

    /// Ranked solutions, best first
    pub fn solutions(&self) -> impl Iterator<Item = &Solution> {
        self.outcome.ranked.iter().rev()
    }

    #[must_use]
    pub fn selected_solution(&self) -> Option<&Solution> {
        self.solutions().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.outcome.ranked.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Change the swap budget by one and solve again
    ///
    /// Increases stop at `EXPECTED_MAX_SWAPS`; a larger starting budget can still be lowered.
    pub fn change_swaps(&mut self, increase: bool) {
        let current = self.board.swap_budget();
        let next = if increase {
            current + 1
        } else {
            current.saturating_sub(1)
        };

        if next == current || (increase && next > EXPECTED_MAX_SWAPS) {
            self.add_message(
                &format!("Swaps must stay between 0 and {EXPECTED_MAX_SWAPS}"),
                MessageStyle::Error,
            );
            return;
        }

        self.board = self.board.with_swap_budget(next);
        self.resolve();
    }

    fn resolve(&mut self) {
        debug!("Re-solving with {} swaps", self.board.swap_budget());
        self.outcome = self.solver.solve(&self.board);
        self.selected = 0;
        self.report_outcome();
    }

    fn report_outcome(&mut self) {
        let swaps = self.board.swap_budget();
        match self.outcome.best() {
            Some(best) => {
                let text = format!(
                    "{swaps} swaps: best is {} for {} points",
                    best.word.to_uppercase(),
                    best.score
                );
                self.add_message(&text, MessageStyle::Success);
            }
            None => self.add_message(&format!("{swaps} swaps: no words found"), MessageStyle::Error),
        }
        if self.outcome.timed_out {
            self.add_message("Deadline reached; results may be incomplete", MessageStyle::Error);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('+' | '=') => self.change_swaps(true),
            KeyCode::Char('-' | '_') => self.change_swaps(false),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
