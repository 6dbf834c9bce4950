//! Movement store operations
//!
//! The store owns the canonical movement list: add prepends a fully-stamped
//! movement, clear-all empties the collection, and every mutation flushes
//! the whole record to disk. Validation is the caller's responsibility; the
//! store accepts any well-typed input.

use crate::error::BolsilloResult;
use crate::models::{Movement, NewMovement};
use crate::storage::Storage;

/// Service for movement store operations
pub struct MovementService<'a> {
    storage: &'a Storage,
}

impl<'a> MovementService<'a> {
    /// Create a new movement service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a movement: assign id, trim description, stamp the current time,
    /// prepend to the collection, and persist
    pub fn add(&self, input: NewMovement) -> BolsilloResult<Movement> {
        let movement = Movement::create(input);
        self.storage.movements.prepend(movement.clone())?;
        self.storage.movements.save()?;
        Ok(movement)
    }

    /// Replace the collection with an empty one and persist
    pub fn clear_all(&self) -> BolsilloResult<()> {
        self.storage.movements.clear()?;
        self.storage.movements.save()
    }

    /// Read the full collection, newest first
    pub fn list(&self) -> BolsilloResult<Vec<Movement>> {
        self.storage.movements.get_all()
    }

    /// Number of movements in the collection
    pub fn count(&self) -> BolsilloResult<usize> {
        self.storage.movements.count()
    }

    /// Distinct categories present in the history, in order of appearance
    ///
    /// Merged with the per-kind suggestion lists by the entry form.
    pub fn categories_in_use(&self) -> BolsilloResult<Vec<String>> {
        let movements = self.storage.movements.get_all()?;
        let mut seen = Vec::new();
        for m in &movements {
            if let Some(category) = &m.category {
                if !category.is_empty() && !seen.iter().any(|c| c == category) {
                    seen.push(category.clone());
                }
            }
        }
        Ok(seen)
    }
}
