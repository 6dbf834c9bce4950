//! Movement register view
//!
//! Filtered totals on top, the active filter line, then the register table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Movement, MovementKind};
use crate::reports::SummaryReport;
use crate::tui::app::{App, InputMode};

/// Render the movement register
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filtered totals
            Constraint::Length(1), // Filter line
            Constraint::Min(3),    // Register table
        ])
        .split(area);

    let movements = app.visible_movements();

    render_totals(frame, app, &movements, chunks[0]);
    render_filter_line(frame, app, chunks[1]);
    render_table(frame, app, &movements, chunks[2]);
}

/// Render income/expense totals for the visible movements
fn render_totals(frame: &mut Frame, app: &App, movements: &[Movement], area: Rect) {
    let report = SummaryReport::generate(movements);
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

/// Render the active filter summary and the search input
fn render_filter_line(frame: &mut Frame, app: &mut App, area: Rect) {
    let kind_label = match app.filter_kind {
        None => "both",
        Some(MovementKind::Income) => "income",
        Some(MovementKind::Expense) => "expense",
    };

    let searching = app.input_mode == InputMode::Editing && !app.has_dialog();

    let mut spans = vec![
        Span::styled(" f:kind=", Style::default().fg(Color::DarkGray)),
        Span::styled(kind_label, Style::default().fg(Color::Cyan)),
        Span::styled("  r:range=", Style::default().fg(Color::DarkGray)),
        Span::styled(app.filter_range.label(), Style::default().fg(Color::Cyan)),
        Span::styled("  /:search=", Style::default().fg(Color::DarkGray)),
    ];

    if searching {
        // Hand the rest of the line to the input widget for cursor rendering
        let prefix_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        let input_area = Rect {
            x: area.x + prefix_width as u16,
            y: area.y,
            width: area.width.saturating_sub(prefix_width as u16),
            height: 1,
        };
        app.search_input.focused = true;
        frame.render_widget(&app.search_input, input_area);
        return;
    }

    app.search_input.focused = false;
    let query = app.search_input.value();
    spans.push(Span::styled(
        if query.is_empty() { "-" } else { query },
        Style::default().fg(Color::Cyan),
    ));
    if app.has_active_filter() {
        spans.push(Span::styled(
            "  x:reset",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the register table
fn render_table(frame: &mut Frame, app: &App, movements: &[Movement], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if movements.is_empty() {
        let message = if app.has_active_filter() {
            "No movements match the current filters. Press 'x' to reset."
        } else {
            "No movements yet. Press 'a' to record one."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(16), // Date
        Constraint::Length(12), // Amount
        Constraint::Min(20),    // Description
        Constraint::Length(14), // Category
        Constraint::Min(10),    // Note
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Note").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = movements
        .iter()
        .map(|m| {
            let amount_color = match m.kind {
                MovementKind::Income => Color::Green,
                MovementKind::Expense => Color::Red,
            };
            let amount = format!("{}{}", m.kind.sign(), m.amount.format_with_symbol(symbol));
            let category = match m.category.as_deref() {
                Some(c) if !c.is_empty() => c.to_string(),
                _ => "-".to_string(),
            };

            Row::new(vec![
                Cell::from(m.created_at.format(&app.settings.date_format).to_string()),
                Cell::from(amount).style(Style::default().fg(amount_color)),
                Cell::from(m.description.clone()),
                Cell::from(category),
                Cell::from(m.note.clone().unwrap_or_default()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(movements.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
