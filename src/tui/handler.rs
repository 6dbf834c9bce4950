//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog, the search input, or the
//! current view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_search_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddMovement => {
            dialogs::movement::handle_key(app, key);
        }
        ActiveDialog::ConfirmClear => {
            dialogs::confirm::handle_key(app, key);
        }
        ActiveDialog::Help => {
            // Any key closes the help dialog
            app.close_dialog();
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }

        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }

        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Home);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Movements);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Dashboard);
            return Ok(());
        }

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddMovement);
            return Ok(());
        }

        _ => {}
    }

    match app.active_view {
        ActiveView::Movements => handle_register_key(app, key),
        ActiveView::Home | ActiveView::Dashboard => Ok(()),
    }
}

/// Handle keys in the register view
fn handle_register_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let count = app.visible_movements().len();
            app.move_down(count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        KeyCode::Char('f') => {
            app.cycle_kind_filter();
        }
        KeyCode::Char('r') => {
            app.cycle_range_filter();
        }
        KeyCode::Char('/') => {
            app.clear_status();
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('x') => {
            app.reset_filters();
        }

        KeyCode::Char('D') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::ConfirmClear);
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while the search input is being edited
///
/// The filter applies live as the query changes; Enter or Esc returns to
/// normal mode, keeping the query active.
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.selected_index = 0;
        }
        KeyCode::Delete => {
            app.search_input.delete();
            app.selected_index = 0;
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_start(),
        KeyCode::End => app.search_input.move_end(),
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.selected_index = 0;
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BolsilloPaths;
    use crate::config::settings::Settings;
    use crate::models::MovementKind;
    use crate::storage::Storage;
    use crate::tui::app::RangeFilter;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_env() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BolsilloPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, Settings::default())
    }

    #[test]
    fn test_q_quits() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_switch_views() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Dashboard);

        handle_key_event(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Movements);

        handle_key_event(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Home);
    }

    #[test]
    fn test_kind_filter_cycles() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Movements);

        handle_key_event(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.filter_kind, Some(MovementKind::Income));

        handle_key_event(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.filter_kind, Some(MovementKind::Expense));

        handle_key_event(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.filter_kind, None);
    }

    #[test]
    fn test_search_flow() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Movements);

        handle_key_event(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.input_mode, InputMode::Editing);

        handle_key_event(&mut app, key(KeyCode::Char('s'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('u'))).unwrap();
        assert_eq!(app.search_input.value(), "su");

        // Enter leaves editing mode but keeps the query
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.filter().text.as_deref(), Some("su"));
    }

    #[test]
    fn test_reset_filters() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Movements);

        handle_key_event(&mut app, key(KeyCode::Char('f'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert!(app.has_active_filter());

        handle_key_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(!app.has_active_filter());
        assert_eq!(app.filter_range, RangeFilter::All);
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Movements);

        handle_key_event(&mut app, key(KeyCode::Char('D'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmClear);

        // 'n' backs out without touching the store
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_add_dialog_records_movement() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddMovement);

        // Kind stays Expense; Tab to category, pick the first suggestion
        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        // Description
        for c in "Super chino".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();

        // Amount
        for c in "2500.50".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::None);

        let all = app.all_movements();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "Super chino");
        assert_eq!(all[0].amount.cents(), 250050);
        assert_eq!(all[0].category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_add_dialog_rejects_empty_description() {
        let (_tmp, storage, settings) = test_env();
        let mut app = App::new(&storage, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();

        // Jump straight to the amount field and submit without a description
        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap(); // picks a category
        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap(); // skip description
        handle_key_event(&mut app, key(KeyCode::Char('9'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        // Dialog stays open with the error shown; nothing was stored
        assert_eq!(app.active_dialog, ActiveDialog::AddMovement);
        assert!(app.movement_form.error_message.is_some());
        assert_eq!(app.all_movements().len(), 0);
    }
}
