//! Path management for MiBolsillo
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `MIBOLSILLO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/mibolsillo` or `~/.config/mibolsillo`
//! 3. Windows: `%APPDATA%\mibolsillo`

use std::path::PathBuf;

use crate::error::BolsilloError;

/// Manages all paths used by MiBolsillo
#[derive(Debug, Clone)]
pub struct BolsilloPaths {
    /// Base directory for all MiBolsillo data
    base_dir: PathBuf,
}

impl BolsilloPaths {
    /// Create a new BolsilloPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BolsilloError> {
        let base_dir = if let Ok(custom) = std::env::var("MIBOLSILLO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BolsilloPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/mibolsillo/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/mibolsillo/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to movements.json, the single persisted record
    pub fn movements_file(&self) -> PathBuf {
        self.data_dir().join("movements.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BolsilloError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BolsilloError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BolsilloError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BolsilloError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| BolsilloError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("mibolsillo"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BolsilloError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BolsilloError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("mibolsillo"))
}
