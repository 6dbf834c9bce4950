//! Report display formatting
//!
//! Terminal tables for the summary and the 7-day series.

use crate::reports::{SummaryReport, WeeklyReport};

/// Format the summary report for terminal display
pub fn format_summary(report: &SummaryReport) -> String {
    let mut output = String::new();

    output.push_str("Summary\n");
    output.push_str(&"=".repeat(32));
    output.push('\n');
    output.push_str(&format!("{:<12} {:>16}\n", "Income:", report.total_income.to_string()));
    output.push_str(&format!(
        "{:<12} {:>16}\n",
        "Expenses:",
        report.total_expense.to_string()
    ));
    output.push_str(&"-".repeat(32));
    output.push('\n');
    output.push_str(&format!("{:<12} {:>16}\n", "Net:", report.net.to_string()));
    output.push_str(&format!("{:<12} {:>16}\n", "Movements:", report.movement_count));

    output
}

/// Format the 7-day series as a table
pub fn format_weekly(report: &WeeklyReport) -> String {
    let mut output = String::new();

    output.push_str("Last 7 days (income vs expenses)\n");
    output.push_str(&format!(
        "{:4} {:10} {:>14} {:>14}\n",
        "Day", "Date", "Income", "Expenses"
    ));
    output.push_str(&"-".repeat(46));
    output.push('\n');

    for day in &report.days {
        output.push_str(&format!(
            "{:4} {:10} {:>14} {:>14}\n",
            day.label,
            day.date.format("%Y-%m-%d"),
            day.income.to_string(),
            day.expense.to_string()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Movement, MovementKind, NewMovement};
    use crate::reports::{SummaryReport, WeeklyReport};

    fn movements() -> Vec<Movement> {
        vec![
            Movement::create(NewMovement {
                kind: MovementKind::Income,
                description: "Sueldo".to_string(),
                amount: Money::from_cents(300000),
                category: Some("Salary".to_string()),
                note: None,
            }),
            Movement::create(NewMovement {
                kind: MovementKind::Expense,
                description: "Super chino".to_string(),
                amount: Money::from_cents(250050),
                category: Some("Food".to_string()),
                note: None,
            }),
        ]
    }

    #[test]
    fn test_format_summary() {
        let report = SummaryReport::generate(&movements());
        let text = format_summary(&report);
        assert!(text.contains("$3000.00"));
        assert!(text.contains("$2500.50"));
        assert!(text.contains("$499.50"));
    }

    #[test]
    fn test_format_weekly_has_seven_rows() {
        let report = WeeklyReport::generate(&movements());
        let text = format_weekly(&report);
        let data_rows = text
            .lines()
            .filter(|l| l.contains('-') && l.contains('$'))
            .count();
        assert_eq!(data_rows, 7);
    }
}
