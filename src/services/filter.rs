//! Filter engine
//!
//! A pure, idempotent predicate application over the movement collection.
//! Every active field narrows the result; an empty filter is the identity.
//! Original order is preserved.

use chrono::{DateTime, Utc};

use crate::models::{Movement, MovementKind};

/// Filter specification for the movement list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementFilter {
    /// Only this kind (None = all)
    pub kind: Option<MovementKind>,
    /// Exact category match; movements without a category only match the
    /// empty string
    pub category: Option<String>,
    /// Case-insensitive substring over description + note
    pub text: Option<String>,
    /// Only movements at most this many whole days old (boundary inclusive)
    pub last_days: Option<i64>,
}

impl MovementFilter {
    /// Create an empty (identity) filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a movement kind
    pub fn kind(mut self, kind: MovementKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to an exact category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a text match over description + note
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Restrict to the last N days
    pub fn last_days(mut self, days: i64) -> Self {
        self.last_days = Some(days);
        self
    }

    /// Whether no predicate is active
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.text.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.last_days.is_none()
    }

    /// Apply the filter against the current time
    pub fn apply(&self, movements: &[Movement]) -> Vec<Movement> {
        self.apply_at(movements, Utc::now())
    }

    /// Apply the filter, measuring day ranges from `now`
    ///
    /// `now` is explicit so day-range behavior is deterministic in tests.
    pub fn apply_at(&self, movements: &[Movement], now: DateTime<Utc>) -> Vec<Movement> {
        movements
            .iter()
            .filter(|m| self.matches(m, now))
            .cloned()
            .collect()
    }

    fn matches(&self, movement: &Movement, now: DateTime<Utc>) -> bool {
        if let Some(kind) = self.kind {
            if movement.kind != kind {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if movement.category_or_empty() != category {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let query = text.trim().to_lowercase();
            if !query.is_empty() && !movement.search_text().to_lowercase().contains(&query) {
                return false;
            }
        }

        if let Some(limit) = self.last_days {
            // Whole elapsed days, boundary inclusive
            let elapsed = (now - movement.created_at).num_days().abs();
            if elapsed > limit {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MovementId};
    use chrono::Duration;

    fn movement(
        kind: MovementKind,
        description: &str,
        category: Option<&str>,
        note: Option<&str>,
        age_days: i64,
    ) -> Movement {
        Movement {
            id: MovementId::new(),
            kind,
            category: category.map(String::from),
            description: description.to_string(),
            note: note.map(String::from),
            amount: Money::from_cents(1000),
            created_at: Utc::now() - Duration::days(age_days),
        }
    }

    fn sample_collection() -> Vec<Movement> {
        vec![
            movement(MovementKind::Expense, "Super chino", Some("Food"), None, 0),
            movement(MovementKind::Income, "Sueldo", Some("Salary"), None, 2),
            movement(
                MovementKind::Expense,
                "Pharmacy",
                Some("Health"),
                Some("ibuprofen"),
                10,
            ),
            movement(MovementKind::Expense, "Bus card", None, None, 40),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let all = sample_collection();
        let filtered = MovementFilter::new().apply(&all);
        assert_eq!(filtered.len(), all.len());
        for (a, b) in all.iter().zip(&filtered) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_kind_filters_partition_the_collection() {
        let all = sample_collection();
        let expenses = MovementFilter::new().kind(MovementKind::Expense).apply(&all);
        let incomes = MovementFilter::new().kind(MovementKind::Income).apply(&all);

        assert_eq!(expenses.len() + incomes.len(), all.len());
        for m in &expenses {
            assert!(!incomes.iter().any(|i| i.id == m.id));
        }
    }

    #[test]
    fn test_text_filter_substring_case_insensitive() {
        let all = sample_collection();
        let filtered = MovementFilter::new().text("super").apply(&all);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Super chino");
    }

    #[test]
    fn test_text_filter_searches_note() {
        let all = sample_collection();
        let filtered = MovementFilter::new().text("ibupro").apply(&all);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Pharmacy");
    }

    #[test]
    fn test_category_exact_match() {
        let all = sample_collection();
        let filtered = MovementFilter::new().category("Food").apply(&all);
        assert_eq!(filtered.len(), 1);

        // "Foo" is not a prefix match
        assert!(MovementFilter::new().category("Foo").apply(&all).is_empty());
    }

    #[test]
    fn test_day_range_boundary_inclusive() {
        let all = sample_collection();
        let now = Utc::now();

        let last_week = MovementFilter::new().last_days(7).apply_at(&all, now);
        assert_eq!(last_week.len(), 2); // 0 and 2 days old

        let last_month = MovementFilter::new().last_days(30).apply_at(&all, now);
        assert_eq!(last_month.len(), 3); // everything but the 40-day entry

        // Exactly on the boundary stays in
        let exact = vec![movement(MovementKind::Expense, "edge", None, None, 7)];
        assert_eq!(MovementFilter::new().last_days(7).apply_at(&exact, now).len(), 1);
    }

    #[test]
    fn test_combined_predicates_all_must_hold() {
        let all = sample_collection();
        let filtered = MovementFilter::new()
            .kind(MovementKind::Expense)
            .text("chino")
            .last_days(7)
            .apply(&all);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Super chino");
    }

    #[test]
    fn test_is_empty() {
        assert!(MovementFilter::new().is_empty());
        assert!(MovementFilter::new().text("   ").is_empty());
        assert!(!MovementFilter::new().last_days(7).is_empty());
    }
}
