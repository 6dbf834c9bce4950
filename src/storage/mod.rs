//! Storage layer for MiBolsillo
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The movement collection is the single persistence unit.

pub mod file_io;
pub mod movements;

pub use file_io::{read_json, write_json_atomic};
pub use movements::MovementRepository;

use crate::config::paths::BolsilloPaths;
use crate::error::BolsilloError;

/// Main storage coordinator
pub struct Storage {
    paths: BolsilloPaths,
    pub movements: MovementRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BolsilloPaths) -> Result<Self, BolsilloError> {
        paths.ensure_directories()?;

        Ok(Self {
            movements: MovementRepository::new(paths.movements_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BolsilloPaths {
        &self.paths
    }

    /// Hydrate all data from disk
    pub fn load_all(&mut self) -> Result<(), BolsilloError> {
        self.movements.load()?;
        Ok(())
    }

    /// Flush all data to disk
    pub fn save_all(&self) -> Result<(), BolsilloError> {
        self.movements.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BolsilloPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.movements.count().unwrap(), 0);
    }
}
