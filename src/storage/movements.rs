//! Movement repository for JSON storage
//!
//! The entire collection is one persisted record in movements.json, written
//! as a whole on every save. A Vec keeps insertion order (newest first),
//! which is domain data here - there is no secondary index to maintain.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::BolsilloError;
use crate::models::Movement;

use super::file_io::{read_json, write_json_atomic};

/// Current persisted schema version
pub const SCHEMA_VERSION: u32 = 1;

/// The single persisted record: a version tag plus the movement collection
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MovementData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    movements: Vec<Movement>,
}

// Files written before the version tag existed read as version 1
fn default_schema_version() -> u32 {
    1
}

impl Default for MovementData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            movements: Vec::new(),
        }
    }
}

/// Repository for movement persistence
pub struct MovementRepository {
    path: PathBuf,
    data: RwLock<Vec<Movement>>,
}

impl MovementRepository {
    /// Create a new movement repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load movements from disk, running schema migration if needed
    ///
    /// A missing file hydrates an empty collection; a file with a newer
    /// schema version than this binary supports is a storage error.
    pub fn load(&self) -> Result<(), BolsilloError> {
        let file_data: MovementData = read_json(&self.path)?;
        let movements = migrate(file_data)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BolsilloError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = movements;
        Ok(())
    }

    /// Save the whole collection to disk
    pub fn save(&self) -> Result<(), BolsilloError> {
        let data = self
            .data
            .read()
            .map_err(|e| BolsilloError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = MovementData {
            schema_version: SCHEMA_VERSION,
            movements: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all movements in insertion order (newest first)
    pub fn get_all(&self) -> Result<Vec<Movement>, BolsilloError> {
        let data = self
            .data
            .read()
            .map_err(|e| BolsilloError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Prepend a movement (newest-first ordering)
    pub fn prepend(&self, movement: Movement) -> Result<(), BolsilloError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BolsilloError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, movement);
        Ok(())
    }

    /// Replace the collection with an empty one
    pub fn clear(&self) -> Result<(), BolsilloError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BolsilloError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }

    /// Count movements
    pub fn count(&self) -> Result<usize, BolsilloError> {
        let data = self
            .data
            .read()
            .map_err(|e| BolsilloError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

/// Bring a persisted record up to the current schema version
fn migrate(data: MovementData) -> Result<Vec<Movement>, BolsilloError> {
    match data.schema_version {
        SCHEMA_VERSION => Ok(data.movements),
        v if v < SCHEMA_VERSION => {
            // No older versions exist yet; this arm is where stepwise
            // migrations will go
            Ok(data.movements)
        }
        v => Err(BolsilloError::Storage(format!(
            "Data file has schema version {} but this build supports up to {}",
            v, SCHEMA_VERSION
        ))),
    }
}
