//! Home view
//!
//! The landing screen: net balance front and center, totals beneath it,
//! and the shortcuts into the other screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::SummaryReport;
use crate::tui::app::App;

/// Render the home view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Balance card
            Constraint::Length(4), // Totals line
            Constraint::Min(3),    // Shortcuts
        ])
        .split(area);

    let report = SummaryReport::generate(&app.all_movements());
    let symbol = app.settings.currency_symbol.as_str();

    render_balance(frame, &report, symbol, chunks[0]);
    render_totals(frame, &report, symbol, chunks[1]);
    render_shortcuts(frame, chunks[2]);
}

/// Render the net balance card
fn render_balance(frame: &mut Frame, report: &SummaryReport, symbol: &str, area: Rect) {
    let balance_color = if report.net.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Current balance",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            report.net.format_with_symbol(symbol),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} movement(s) recorded", report.movement_count),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

/// Render the income/expense totals line
fn render_totals(frame: &mut Frame, report: &SummaryReport, symbol: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Income ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            report.total_income.format_with_symbol(symbol),
            Style::default().fg(Color::Green),
        ),
        Span::raw("    "),
        Span::styled("Expenses ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            report.total_expense.format_with_symbol(symbol),
            Style::default().fg(Color::Red),
        ),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render the navigation shortcuts
fn render_shortcuts(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        shortcut("a", "Record a movement"),
        shortcut("2", "Browse and filter the register"),
        shortcut("3", "See the 7-day trend"),
        shortcut("?", "All keyboard shortcuts"),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn shortcut(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[{}] ", key),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
