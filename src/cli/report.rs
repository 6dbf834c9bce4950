//! Report CLI commands
//!
//! Summary totals and the 7-day trend table.

use clap::Subcommand;

use crate::display::report::{format_summary, format_weekly};
use crate::error::BolsilloResult;
use crate::reports::{SummaryReport, WeeklyReport};
use crate::services::MovementService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show totals by kind and the net balance
    Summary,
    /// Show the last-7-days income/expense series
    Weekly,
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> BolsilloResult<()> {
    let service = MovementService::new(storage);
    let movements = service.list()?;

    match cmd {
        ReportCommands::Summary => {
            let report = SummaryReport::generate(&movements);
            print!("{}", format_summary(&report));
        }
        ReportCommands::Weekly => {
            let report = WeeklyReport::generate(&movements);
            print!("{}", format_weekly(&report));
        }
    }

    Ok(())
}
