//! Movement display formatting
//!
//! Register-style rows for the CLI list output.

use crate::models::Movement;

/// Format a single movement as a register row
pub fn format_movement_row(movement: &Movement) -> String {
    let amount = format!("{}{}", movement.kind.sign(), movement.amount);
    let note_part = match &movement.note {
        Some(note) if !note.is_empty() => format!("  ({})", note),
        _ => String::new(),
    };

    format!(
        "{} {:>12}  {:20} [{}]{}",
        movement.created_at.format("%Y-%m-%d %H:%M"),
        amount,
        truncate(&movement.description, 20),
        category_display(movement),
        note_part
    )
}

/// Format a list of movements as a register
pub fn format_movement_register(movements: &[Movement]) -> String {
    if movements.is_empty() {
        return "No movements found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:16} {:>12}  {:20} {}\n",
        "Date", "Amount", "Description", "Category"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for movement in movements {
        output.push_str(&format_movement_row(movement));
        output.push('\n');
    }

    output
}

/// Format the details of a single movement (after add)
pub fn format_movement_details(movement: &Movement) -> String {
    let mut output = String::new();

    output.push_str(&format!("  ID:          {}\n", movement.id));
    output.push_str(&format!("  Kind:        {}\n", movement.kind));
    output.push_str(&format!(
        "  Amount:      {}{}\n",
        movement.kind.sign(),
        movement.amount
    ));
    output.push_str(&format!("  Description: {}\n", movement.description));
    output.push_str(&format!("  Category:    {}\n", category_display(movement)));
    if let Some(note) = &movement.note {
        output.push_str(&format!("  Note:        {}\n", note));
    }
    output.push_str(&format!(
        "  Date:        {}\n",
        movement.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn category_display(movement: &Movement) -> &str {
    match movement.category.as_deref() {
        Some(category) if !category.is_empty() => category,
        _ => "Uncategorized",
    }
}

/// Truncate a string to a maximum length, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
