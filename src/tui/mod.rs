//! Terminal user interface
//!
//! Full-screen interactive mode built on ratatui: a home screen with the
//! net balance, the movement register with live filters, and a dashboard
//! with the 7-day trend chart.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
