//! Movement entry dialog
//!
//! Modal form for recording a movement: kind toggle, category with
//! suggestions, description, amount and note. Validation runs on submit
//! and the error shows inline without losing the typed values.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::cli::movement::validate_new_movement;
use crate::models::{suggested_categories, MovementKind};
use crate::services::MovementService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the movement form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementField {
    #[default]
    Kind,
    Category,
    Description,
    Amount,
    Note,
}

impl MovementField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Note,
            Self::Note => Self::Kind,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Note,
            Self::Category => Self::Kind,
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Note => Self::Amount,
        }
    }
}

/// State for the movement entry form
#[derive(Debug, Clone)]
pub struct MovementFormState {
    /// Selected movement kind
    pub kind: MovementKind,

    /// Currently focused field
    pub focused_field: MovementField,

    /// Category input
    pub category_input: TextInput,

    /// Highlighted row in the suggestion list
    pub suggestion_index: usize,

    /// Description input
    pub description_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Note input
    pub note_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for MovementFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        let mut form = Self {
            kind: MovementKind::Expense,
            focused_field: MovementField::Kind,
            category_input: TextInput::new().placeholder("pick or type"),
            suggestion_index: 0,
            description_input: TextInput::new().placeholder("what was it?"),
            amount_input: TextInput::new().placeholder("2500.50"),
            note_input: TextInput::new().placeholder("optional"),
            error_message: None,
        };
        form.update_focus();
        form
    }

    /// Toggle between income and expense
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        self.suggestion_index = 0;
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.category_input.focused = self.focused_field == MovementField::Category;
        self.description_input.focused = self.focused_field == MovementField::Description;
        self.amount_input.focused = self.focused_field == MovementField::Amount;
        self.note_input.focused = self.focused_field == MovementField::Note;
    }

    /// The focused text input, if the focused field has one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            MovementField::Kind => None,
            MovementField::Category => Some(&mut self.category_input),
            MovementField::Description => Some(&mut self.description_input),
            MovementField::Amount => Some(&mut self.amount_input),
            MovementField::Note => Some(&mut self.note_input),
        }
    }

    /// Category suggestions for the current kind: the per-kind list merged
    /// with categories already used in the history, narrowed by the typed
    /// text
    pub fn suggestions(&self, app: &App) -> Vec<String> {
        let mut candidates: Vec<String> = suggested_categories(self.kind)
            .iter()
            .map(|c| c.to_string())
            .collect();

        let history = MovementService::new(app.storage)
            .categories_in_use()
            .unwrap_or_default();
        for category in history {
            if !candidates.iter().any(|c| c == &category) {
                candidates.push(category);
            }
        }

        let typed = self.category_input.value().trim().to_lowercase();
        candidates
            .into_iter()
            .filter(|c| typed.is_empty() || c.to_lowercase().contains(&typed))
            .take(5)
            .collect()
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the movement dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(54, 16, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Movement ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Category
            Constraint::Length(5), // Suggestions
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_kind_field(frame, &app.movement_form, chunks[0]);
    render_input_field(
        frame,
        chunks[1],
        "Category",
        &app.movement_form.category_input,
        app.movement_form.focused_field == MovementField::Category,
    );
    render_suggestions(frame, app, chunks[2]);
    render_input_field(
        frame,
        chunks[3],
        "Description",
        &app.movement_form.description_input,
        app.movement_form.focused_field == MovementField::Description,
    );
    render_input_field(
        frame,
        chunks[4],
        "Amount",
        &app.movement_form.amount_input,
        app.movement_form.focused_field == MovementField::Amount,
    );
    render_input_field(
        frame,
        chunks[5],
        "Note",
        &app.movement_form.note_input,
        app.movement_form.focused_field == MovementField::Note,
    );

    if let Some(ref error) = app.movement_form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[7]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Render the income/expense toggle row
fn render_kind_field(frame: &mut Frame, form: &MovementFormState, area: Rect) {
    let focused = form.focused_field == MovementField::Kind;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let kind_color = match form.kind {
        MovementKind::Income => Color::Green,
        MovementKind::Expense => Color::Red,
    };

    let mut spans = vec![
        Span::styled(format!("{:>11}: ", "Kind"), label_style),
        Span::styled(
            format!("< {} >", form.kind),
            Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
        ),
    ];
    if focused {
        spans.push(Span::styled(
            "  (left/right to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a labeled text field
fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let label_text = format!("{:>11}: ", label);
    let label_width = label_text.chars().count() as u16;

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label_text, label_style))),
        area,
    );

    let input_area = Rect {
        x: area.x + label_width,
        y: area.y,
        width: area.width.saturating_sub(label_width),
        height: 1,
    };
    frame.render_widget(input, input_area);
}

/// Render the category suggestion list
fn render_suggestions(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.movement_form.focused_field != MovementField::Category {
        return;
    }

    let suggestions = app.movement_form.suggestions(app);
    if suggestions.is_empty() {
        let hint = Paragraph::new("             (free text is fine)")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|name| {
            ListItem::new(Line::from(Span::styled(
                format!("             {}", name),
                Style::default().fg(Color::White),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    let idx = app
        .movement_form
        .suggestion_index
        .min(suggestions.len().saturating_sub(1));
    state.select(Some(idx));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Handle key input for the movement dialog
///
/// Returns true if the key was handled.
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.movement_form.prev_field();
            } else {
                app.movement_form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            app.movement_form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            // On the category field Enter picks the highlighted suggestion
            if app.movement_form.focused_field == MovementField::Category {
                pick_suggestion(app);
                return true;
            }

            if let Err(e) = save_movement(app) {
                app.movement_form.set_error(e);
            }
            return true;
        }

        KeyCode::Up => {
            if app.movement_form.focused_field == MovementField::Category {
                if app.movement_form.suggestion_index > 0 {
                    app.movement_form.suggestion_index -= 1;
                }
            } else {
                app.movement_form.prev_field();
            }
            return true;
        }

        KeyCode::Down => {
            if app.movement_form.focused_field == MovementField::Category {
                app.movement_form.suggestion_index += 1;
            } else {
                app.movement_form.next_field();
            }
            return true;
        }

        KeyCode::Left => {
            if app.movement_form.focused_field == MovementField::Kind {
                app.movement_form.toggle_kind();
            } else if let Some(input) = app.movement_form.focused_input() {
                input.move_left();
            }
            return true;
        }

        KeyCode::Right => {
            if app.movement_form.focused_field == MovementField::Kind {
                app.movement_form.toggle_kind();
            } else if let Some(input) = app.movement_form.focused_input() {
                input.move_right();
            }
            return true;
        }

        KeyCode::Home => {
            if let Some(input) = app.movement_form.focused_input() {
                input.move_start();
            }
            return true;
        }

        KeyCode::End => {
            if let Some(input) = app.movement_form.focused_input() {
                input.move_end();
            }
            return true;
        }

        KeyCode::Backspace => {
            app.movement_form.clear_error();
            if let Some(input) = app.movement_form.focused_input() {
                input.backspace();
            }
            if app.movement_form.focused_field == MovementField::Category {
                app.movement_form.suggestion_index = 0;
            }
            return true;
        }

        KeyCode::Delete => {
            app.movement_form.clear_error();
            if let Some(input) = app.movement_form.focused_input() {
                input.delete();
            }
            return true;
        }

        KeyCode::Char(c) => {
            app.movement_form.clear_error();

            if app.movement_form.focused_field == MovementField::Kind {
                if c == ' ' {
                    app.movement_form.toggle_kind();
                }
                return true;
            }

            if let Some(input) = app.movement_form.focused_input() {
                input.insert(c);
            }
            if app.movement_form.focused_field == MovementField::Category {
                app.movement_form.suggestion_index = 0;
            }
            return true;
        }

        _ => {}
    }

    false
}

/// Copy the highlighted suggestion into the category input and advance
fn pick_suggestion(app: &mut App) {
    let suggestions = app.movement_form.suggestions(app);
    let idx = app
        .movement_form
        .suggestion_index
        .min(suggestions.len().saturating_sub(1));
    if let Some(name) = suggestions.get(idx) {
        app.movement_form.category_input = TextInput::new().content(name.clone());
        app.movement_form.next_field();
    } else if !app.movement_form.category_input.is_empty() {
        // Free-text category, no matching suggestion
        app.movement_form.next_field();
    }
}

/// Validate the form and store the movement
fn save_movement(app: &mut App) -> Result<(), String> {
    let form = &app.movement_form;
    let input = validate_new_movement(
        form.kind,
        form.category_input.value(),
        form.description_input.value(),
        form.amount_input.value(),
        form.note_input.value(),
    )?;

    let movement = MovementService::new(app.storage)
        .add(input)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.selected_index = 0;
    app.set_status(format!(
        "Recorded {} {}",
        movement.kind.sign(),
        movement.amount
    ));

    Ok(())
}
