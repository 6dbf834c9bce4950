//! Terminal display formatting
//!
//! Formatting helpers shared by the CLI handlers; the TUI renders through
//! ratatui widgets instead.

pub mod movement;
pub mod report;
