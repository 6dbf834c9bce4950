//! Clear-all confirmation dialog
//!
//! Deleting the whole history is irreversible, so it always asks first.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::MovementService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the clear-all confirmation dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let count = MovementService::new(app.storage).count().unwrap_or(0);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete ALL {} movement(s)? This cannot be undone.", count),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Red)),
            Span::raw(" Delete everything  "),
            Span::styled("[N/Esc]", Style::default().fg(Color::Green)),
            Span::raw(" Keep"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key input for the confirmation dialog
///
/// Returns true if the key was handled.
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let service = MovementService::new(app.storage);
            let count = service.count().unwrap_or(0);
            match service.clear_all() {
                Ok(()) => {
                    app.selected_index = 0;
                    app.set_status(format!("Deleted {} movement(s)", count));
                }
                Err(e) => {
                    app.set_status(format!("Clear failed: {}", e));
                }
            }
            app.close_dialog();
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            true
        }
        _ => false,
    }
}
