//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::models::{Movement, MovementKind};
use crate::services::{MovementFilter, MovementService};
use crate::storage::Storage;

use super::dialogs::movement::MovementFormState;
use super::widgets::input::TextInput;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    Movements,
    Dashboard,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddMovement,
    ConfirmClear,
    Help,
}

/// Day-range presets for the register filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeFilter {
    #[default]
    All,
    Week,
    Month,
}

impl RangeFilter {
    /// Day limit for this preset (None = unbounded)
    pub fn days(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Week => Some(7),
            Self::Month => Some(30),
        }
    }

    /// The next preset in the cycle All -> 7d -> 30d -> All
    pub fn cycled(self) -> Self {
        match self {
            Self::All => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::All,
        }
    }

    /// Short label for the filter line
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Kind filter for the register (None = both)
    pub filter_kind: Option<MovementKind>,

    /// Day-range filter for the register
    pub filter_range: RangeFilter,

    /// Text search input for the register
    pub search_input: TextInput,

    /// Selected row index in the register
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-movement form state
    pub movement_form: MovementFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            filter_kind: None,
            filter_range: RangeFilter::default(),
            search_input: TextInput::new().placeholder("type to search"),
            selected_index: 0,
            status_message: None,
            movement_form: MovementFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_index = 0;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddMovement {
            self.movement_form = MovementFormState::new();
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The filter built from the current register state
    pub fn filter(&self) -> MovementFilter {
        let mut filter = MovementFilter::new();
        if let Some(kind) = self.filter_kind {
            filter = filter.kind(kind);
        }
        if let Some(days) = self.filter_range.days() {
            filter = filter.last_days(days);
        }
        let query = self.search_input.value().trim();
        if !query.is_empty() {
            filter = filter.text(query);
        }
        filter
    }

    /// Whether any register filter is active
    pub fn has_active_filter(&self) -> bool {
        !self.filter().is_empty()
    }

    /// The full collection, newest first
    pub fn all_movements(&self) -> Vec<Movement> {
        MovementService::new(self.storage)
            .list()
            .unwrap_or_default()
    }

    /// The collection after applying the current register filter
    pub fn visible_movements(&self) -> Vec<Movement> {
        self.filter().apply(&self.all_movements())
    }

    /// Cycle the kind filter: both -> income -> expense -> both
    pub fn cycle_kind_filter(&mut self) {
        self.filter_kind = match self.filter_kind {
            None => Some(MovementKind::Income),
            Some(MovementKind::Income) => Some(MovementKind::Expense),
            Some(MovementKind::Expense) => None,
        };
        self.selected_index = 0;
    }

    /// Cycle the day-range filter
    pub fn cycle_range_filter(&mut self) {
        self.filter_range = self.filter_range.cycled();
        self.selected_index = 0;
    }

    /// Drop every active filter, restoring the full register
    pub fn reset_filters(&mut self) {
        self.filter_kind = None;
        self.filter_range = RangeFilter::All;
        self.search_input.clear();
        self.selected_index = 0;
    }

    /// Move selection up in the register
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the register
    pub fn move_down(&mut self, max: usize) {
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }
}
