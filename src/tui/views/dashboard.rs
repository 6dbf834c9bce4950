//! Dashboard view
//!
//! All-time totals plus a line chart of income vs expenses over the last
//! 7 days, one point per calendar day.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::reports::{SummaryReport, WeeklyReport};
use crate::tui::app::App;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Totals
            Constraint::Min(8),    // Trend chart
        ])
        .split(area);

    let movements = app.all_movements();

    render_totals(frame, app, &SummaryReport::generate(&movements), chunks[0]);
    render_trend(frame, &WeeklyReport::generate(&movements), chunks[1]);
}

/// Render the all-time totals strip
fn render_totals(frame: &mut Frame, app: &App, report: &SummaryReport, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let line = Line::from(vec![
        Span::styled(" Income ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            report.total_income.format_with_symbol(symbol),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Expenses ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            report.total_expense.format_with_symbol(symbol),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Net ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            report.net.format_with_symbol(symbol),
            Style::default()
                .fg(if report.net.is_negative() {
                    Color::Red
                } else {
                    Color::Green
                })
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

/// Render the 7-day income/expense line chart
fn render_trend(frame: &mut Frame, report: &WeeklyReport, area: Rect) {
    let income_points: Vec<(f64, f64)> = report
        .days
        .iter()
        .enumerate()
        .map(|(i, d)| (i as f64, d.income.cents() as f64 / 100.0))
        .collect();
    let expense_points: Vec<(f64, f64)> = report
        .days
        .iter()
        .enumerate()
        .map(|(i, d)| (i as f64, d.expense.cents() as f64 / 100.0))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&income_points),
        Dataset::default()
            .name("Expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&expense_points),
    ];

    // Round the y bound up so the largest day does not sit on the frame
    let max = report.max_day_total().cents() as f64 / 100.0;
    let y_max = if max <= 0.0 { 10.0 } else { max * 1.1 };

    let x_labels: Vec<Span> = report
        .days
        .iter()
        .map(|d| Span::styled(d.label, Style::default().fg(Color::DarkGray)))
        .collect();

    let y_labels = vec![
        Span::styled("0", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.0}", y_max / 2.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{:.0}", y_max), Style::default().fg(Color::DarkGray)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Last 7 days ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, 6.0])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
