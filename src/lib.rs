//! MiBolsillo - Terminal-based personal income/expense tracker
//!
//! This library provides the core functionality for MiBolsillo, a small
//! single-user finance tracker: record income and expense movements, view
//! aggregate totals, filter the history, and see a 7-day trend chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (movements, money, ids)
//! - `storage`: JSON file storage layer (one versioned record)
//! - `services`: Movement store operations and the filter engine
//! - `reports`: Pure aggregations (totals, net, 7-day series)
//! - `display`: Terminal formatting
//! - `cli`: Command-line interface handlers
//! - `tui`: Interactive terminal interface (home, movements, dashboard)

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BolsilloError;
