//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1/2/3", "Home / Movements / Dashboard"),
        key_line("a", "Record a new movement"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::Home => {
            lines.push(section("Home"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "The balance is income minus expenses over the whole history.",
            ));
        }
        ActiveView::Movements => {
            lines.push(section("Movement Register"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("f", "Cycle kind filter (both/income/expense)"));
            lines.push(key_line("r", "Cycle day range (all/7d/30d)"));
            lines.push(key_line("/", "Search description and note"));
            lines.push(key_line("x", "Reset all filters"));
            lines.push(key_line("D", "Delete ALL movements (asks first)"));
        }
        ActiveView::Dashboard => {
            lines.push(section("Dashboard"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Green is income, red is expenses, one point per day for the",
            ));
            lines.push(Line::from("last 7 calendar days."));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
