//! Movement model
//!
//! A movement is a single recorded income or expense entry. The amount is
//! always positive; direction is carried by the kind, never by the sign.
//! Movements are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MovementId;
use super::money::Money;

/// Suggested expense categories shown in the entry form
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Health",
    "Education",
    "Leisure",
    "Other",
];

/// Suggested income categories shown in the entry form
pub const INCOME_CATEGORIES: &[&str] =
    &["Salary", "Sales", "Investments", "Refunds", "Other"];

/// Direction of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl MovementKind {
    /// The display sign for this kind ("+" or "-")
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }

    /// The other kind
    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Suggested categories for a movement kind
///
/// Categories are suggestions, not a closed set: free-text values and
/// categories already present in the history are equally valid.
pub fn suggested_categories(kind: MovementKind) -> &'static [&'static str] {
    match kind {
        MovementKind::Income => INCOME_CATEGORIES,
        MovementKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Input for creating a movement
///
/// Carries exactly what the caller provides; id and timestamp are assigned
/// by the store. The store performs no validation - that is the entry
/// boundary's job.
#[derive(Debug, Clone)]
pub struct NewMovement {
    pub kind: MovementKind,
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// A recorded income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier, assigned at creation
    pub id: MovementId,

    /// Income or expense
    pub kind: MovementKind,

    /// Category label (suggested list or free text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-text description
    pub description: String,

    /// Optional note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Positive amount; direction lives in `kind`
    pub amount: Money,

    /// Creation timestamp (UTC, serialized as RFC 3339)
    pub created_at: DateTime<Utc>,
}

impl Movement {
    /// Build a movement from caller input: fresh id, trimmed description,
    /// current timestamp
    pub fn create(input: NewMovement) -> Self {
        Self {
            id: MovementId::new(),
            kind: input.kind,
            category: input.category,
            description: input.description.trim().to_string(),
            note: input.note,
            amount: input.amount,
            created_at: Utc::now(),
        }
    }

    /// The amount with its direction applied (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            MovementKind::Income => self.amount,
            MovementKind::Expense => -self.amount,
        }
    }

    /// Category for display and exact-match filtering; no category is the
    /// empty string
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Description and note joined for text search
    pub fn search_text(&self) -> String {
        match &self.note {
            Some(note) => format!("{} {}", self.description, note),
            None => self.description.clone(),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {}",
            self.created_at.format("%Y-%m-%d"),
            self.kind.sign(),
            self.amount,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewMovement {
        NewMovement {
            kind: MovementKind::Expense,
            description: "  Super chino  ".to_string(),
            amount: Money::from_cents(250050),
            category: Some("Food".to_string()),
            note: None,
        }
    }

    #[test]
    fn test_create_trims_description() {
        let m = Movement::create(sample_input());
        assert_eq!(m.description, "Super chino");
        assert_eq!(m.kind, MovementKind::Expense);
        assert_eq!(m.amount.cents(), 250050);
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let a = Movement::create(sample_input());
        let b = Movement::create(sample_input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_signed_amount() {
        let mut m = Movement::create(sample_input());
        assert_eq!(m.signed_amount().cents(), -250050);

        m.kind = MovementKind::Income;
        assert_eq!(m.signed_amount().cents(), 250050);
    }

    #[test]
    fn test_search_text_includes_note() {
        let mut input = sample_input();
        input.note = Some("weekly groceries".to_string());
        let m = Movement::create(input);
        assert_eq!(m.search_text(), "Super chino weekly groceries");
    }

    #[test]
    fn test_kind_toggled() {
        assert_eq!(MovementKind::Income.toggled(), MovementKind::Expense);
        assert_eq!(MovementKind::Expense.toggled(), MovementKind::Income);
    }

    #[test]
    fn test_suggested_categories_per_kind() {
        assert!(suggested_categories(MovementKind::Expense).contains(&"Food"));
        assert!(suggested_categories(MovementKind::Income).contains(&"Salary"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let m = Movement::create(sample_input());
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Movement = serde_json::from_str(&json).unwrap();
        assert_eq!(m.id, deserialized.id);
        assert_eq!(m.amount, deserialized.amount);
        assert_eq!(m.created_at, deserialized.created_at);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MovementKind::Income).unwrap();
        assert_eq!(json, "\"income\"");
    }
}
