//! Trip storage collaborators
//!
//! Storage is a whole-record keyed read/write: the last save wins and there
//! is no conflict detection.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::trip::Trip;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid trip id: {id:?}")]
    InvalidId { id: String },

    #[error("Trip store lock poisoned")]
    LockPoisoned,
}

/// Keyed store of whole trip records
pub trait TripRepository: Send + Sync {
    fn load(&self, id: &str) -> Result<Option<Trip>, StorageError>;

    /// Insert or overwrite the record with `trip.id`
    fn save(&self, trip: &Trip) -> Result<(), StorageError>;

    /// Remove the record and with it the itinerary. Missing ids are fine.
    fn delete(&self, id: &str) -> Result<(), StorageError>;

    fn list_ids(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory trip store for tests and for sessions without persistence
#[derive(Debug, Default)]
pub struct MemoryTripRepository {
    trips: RwLock<HashMap<String, Trip>>,
}

impl MemoryTripRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.trips.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TripRepository for MemoryTripRepository {
    fn load(&self, id: &str) -> Result<Option<Trip>, StorageError> {
        let trips = self.trips.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(trips.get(id).cloned())
    }

    fn save(&self, trip: &Trip) -> Result<(), StorageError> {
        let mut trips = self.trips.write().map_err(|_| StorageError::LockPoisoned)?;
        trips.insert(trip.id.clone(), trip.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut trips = self.trips.write().map_err(|_| StorageError::LockPoisoned)?;
        trips.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>, StorageError> {
        let trips = self.trips.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut ids: Vec<String> = trips.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

/// One pretty-printed `<id>.json` file per trip in a directory
#[derive(Debug, Clone)]
pub struct JsonDirTripRepository {
    root: PathBuf,
}

impl JsonDirTripRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, StorageError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidId { id: id.to_string() });
        }
        Ok(self.root.join(format!("{}.json", id)))
    }
}

impl TripRepository for JsonDirTripRepository {
    fn load(&self, id: &str) -> Result<Option<Trip>, StorageError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, trip: &Trip) -> Result<(), StorageError> {
        let path = self.path_for(&trip.id)?;
        fs::create_dir_all(&self.root)?;

        // Write-then-rename so a crash never leaves a truncated record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(trip)?)?;
        fs::rename(&tmp, &path)?;

        debug!("[JsonDirTripRepository] saved trip {} to {}", trip.id, path.display());
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StorageError> {
        let path = self.path_for(id)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>, StorageError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
