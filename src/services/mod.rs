//! Service layer for MiBolsillo
//!
//! The service layer sits between the interfaces (CLI/TUI) and storage:
//! movement store operations with flush-on-mutate, plus the pure filter
//! engine.

pub mod filter;
pub mod movement;

pub use filter::MovementFilter;
pub use movement::MovementService;
