//! Pure aggregations over the movement collection
//!
//! Recomputed from scratch on every read; nothing here caches or mutates.

pub mod summary;
pub mod weekly;

pub use summary::SummaryReport;
pub use weekly::{DayBucket, WeeklyReport};
