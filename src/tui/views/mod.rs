//! TUI views
//!
//! The three main screens (home, movements, dashboard), the tab bar and
//! the status bar.

pub mod dashboard;
pub mod home;
pub mod movements;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Home => home::render(frame, app, layout.main),
        ActiveView::Movements => movements::render(frame, app, layout.main),
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the tab bar
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let selected = match app.active_view {
        ActiveView::Home => 0,
        ActiveView::Movements => 1,
        ActiveView::Dashboard => 2,
    };

    let tabs = Tabs::new(vec!["[1] Home", "[2] Movements", "[3] Dashboard"])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" MiBolsillo ")
                .title_style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(tabs, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddMovement => dialogs::movement::render(frame, app),
        ActiveDialog::ConfirmClear => dialogs::confirm::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
