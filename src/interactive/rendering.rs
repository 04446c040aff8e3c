//! TUI rendering with ratatui
//!
//! Board grid with the selected word's path, the ranked word list and status.

use super::app::{App, MessageStyle};
use crate::core::BOARD_SIDE;
use crate::output::formatters::{CellView, cell_views, format_path, format_swaps};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Solutions
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_solutions_panel(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("✨ SPELLCAST SOLVER ✨")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn cell_style(cell: &CellView) -> Style {
    let style = if cell.swapped {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else if cell.step.is_some() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if cell.letter == '.' {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    if cell.double_word {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn marker_span(cell: &CellView) -> Span<'static> {
    let (text, color) = match (cell.multiplier, cell.double_word) {
        (3, _) => ("³", Color::Red),
        (2, _) => ("²", Color::Blue),
        (_, true) => ("ʷ", Color::Yellow),
        _ if cell.gems > 0 => ("◆", Color::Cyan),
        _ => (" ", Color::Reset),
    };
    Span::styled(text, Style::default().fg(color))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let cells = cell_views(&app.board, app.selected_solution());

    let mut lines = vec![Line::from("")];
    for row in cells.chunks(BOARD_SIDE) {
        let mut spans = vec![Span::raw("  ")];
        for cell in row {
            spans.push(Span::styled(format!(" {:^4}", cell.label()), cell_style(cell)));
            spans.push(marker_span(cell));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  ² DL  ³ TL  ʷ DW (underlined)  ◆ gem",
        Style::default().fg(Color::DarkGray),
    )));

    let title = format!(" Board ({} swaps) ", app.board.swap_budget());
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_solutions_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Ranked words
            Constraint::Length(6), // Selected word details
        ])
        .split(area);

    render_solutions(f, app, chunks[0]);
    render_selected(f, app, chunks[1]);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .solutions()
        .enumerate()
        .map(|(i, solution)| {
            let swaps = if solution.swap_count() == 0 {
                String::new()
            } else {
                format!(" ({} swaps)", solution.swap_count())
            };
            let content = format!(
                "{:>2}. {:<12} {:>4} pts{swaps}",
                i + 1,
                solution.word.to_uppercase(),
                solution.score
            );

            let style = if i == app.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new("No words found")])
    } else {
        List::new(items)
    };

    f.render_widget(
        list.block(
            Block::default()
                .title(" Best Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        ),
        area,
    );
}

fn render_selected(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_solution() {
        Some(solution) => vec![
            Line::from(vec![
                Span::styled(
                    solution.word.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {} points", solution.score)),
            ]),
            Line::from(format!("Path:  {}", format_path(solution))),
            Line::from(format!("Swaps: {}", format_swaps(solution))),
        ],
        None => vec![Line::from("Nothing selected")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Selected ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let outcome = &app.outcome;
    let stats_text = format!(
        "{} found | {} unique | {:.2?}",
        outcome.discovered, outcome.unique, outcome.duration
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("↑/↓: Select | +/-: Swaps | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
