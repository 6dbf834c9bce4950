//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Input validation
//! lives here, at the boundary: the store itself accepts anything.

pub mod movement;
pub mod report;

pub use movement::{handle_movement_command, MovementCommands};
pub use report::{handle_report_command, ReportCommands};
