//! 7-day trend series
//!
//! Buckets movements by local calendar day for the 7 days ending today,
//! oldest first, with per-day income/expense totals. Empty days yield zeros.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::models::{Money, Movement, MovementKind};

/// Fixed short weekday labels, indexed Sunday..Saturday
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One calendar day of the trend series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    /// The calendar day (local)
    pub date: NaiveDate,
    /// Short weekday label ("Sun".."Sat")
    pub label: &'static str,
    /// Income total for the day
    pub income: Money,
    /// Expense total for the day
    pub expense: Money,
}

/// The 7-day income/expense series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyReport {
    /// Exactly 7 buckets, oldest day first, ending today
    pub days: Vec<DayBucket>,
}

impl WeeklyReport {
    /// Compute the series ending on the current local day
    pub fn generate(movements: &[Movement]) -> Self {
        Self::generate_for(movements, Local::now().date_naive())
    }

    /// Compute the series ending on `today`
    ///
    /// A movement belongs to the bucket matching the local calendar day of
    /// its creation timestamp, ignoring time of day.
    pub fn generate_for(movements: &[Movement], today: NaiveDate) -> Self {
        let days = (0..7)
            .rev()
            .map(|back| {
                let date = today
                    .checked_sub_days(Days::new(back))
                    .unwrap_or(today);
                let label = WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize];

                let mut income = Money::zero();
                let mut expense = Money::zero();
                for m in movements {
                    if m.created_at.with_timezone(&Local).date_naive() == date {
                        match m.kind {
                            MovementKind::Income => income += m.amount,
                            MovementKind::Expense => expense += m.amount,
                        }
                    }
                }

                DayBucket {
                    date,
                    label,
                    income,
                    expense,
                }
            })
            .collect();

        Self { days }
    }

    /// Largest single-day total across both series (chart y-axis bound)
    pub fn max_day_total(&self) -> Money {
        self.days
            .iter()
            .flat_map(|d| [d.income, d.expense])
            .max()
            .unwrap_or(Money::zero())
    }
}
