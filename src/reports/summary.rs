//! Summary report
//!
//! Totals by kind and the net balance over the full collection.

use crate::models::{Money, Movement, MovementKind};

/// Aggregate totals over a movement collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts (positive magnitude)
    pub total_expense: Money,
    /// total_income - total_expense
    pub net: Money,
    /// Number of movements
    pub movement_count: usize,
}

impl SummaryReport {
    /// Compute the summary for a collection
    pub fn generate(movements: &[Movement]) -> Self {
        let total_income: Money = movements
            .iter()
            .filter(|m| m.kind == MovementKind::Income)
            .map(|m| m.amount)
            .sum();

        let total_expense: Money = movements
            .iter()
            .filter(|m| m.kind == MovementKind::Expense)
            .map(|m| m.amount)
            .sum();

        Self {
            total_income,
            total_expense,
            net: total_income - total_expense,
            movement_count: movements.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewMovement;

    fn movement(kind: MovementKind, cents: i64) -> Movement {
        Movement::create(NewMovement {
            kind,
            description: "test".to_string(),
            amount: Money::from_cents(cents),
            category: None,
            note: None,
        })
    }

    #[test]
    fn test_empty_collection() {
        let report = SummaryReport::generate(&[]);
        assert_eq!(report.total_income, Money::zero());
        assert_eq!(report.total_expense, Money::zero());
        assert_eq!(report.net, Money::zero());
        assert_eq!(report.movement_count, 0);
    }

    #[test]
    fn test_known_scenario() {
        // One expense of 2500.50 and one income of 3000
        let movements = vec![
            movement(MovementKind::Expense, 250050),
            movement(MovementKind::Income, 300000),
        ];

        let report = SummaryReport::generate(&movements);
        assert_eq!(report.total_income.cents(), 300000);
        assert_eq!(report.total_expense.cents(), 250050);
        assert_eq!(report.net.cents(), 49950); // 499.50
    }

    #[test]
    fn test_net_identity() {
        let movements = vec![
            movement(MovementKind::Income, 12345),
            movement(MovementKind::Expense, 678),
            movement(MovementKind::Income, 90),
            movement(MovementKind::Expense, 10000),
        ];

        let report = SummaryReport::generate(&movements);
        assert_eq!(report.net, report.total_income - report.total_expense);
    }
}
