//! Configuration module for MiBolsillo
//!
//! Contains path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::BolsilloPaths;
pub use settings::Settings;
