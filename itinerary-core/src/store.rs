//! Persistence for the trip item list.
//!
//! The whole list is one blob: read once at startup, overwritten on every
//! mutation.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ItineraryError, ItineraryResult};
use crate::trip_item::TripItem;

/// Backing storage for an [`Itinerary`](crate::repository::Itinerary).
pub trait TripStore {
    /// Read the stored list. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> ItineraryResult<Option<Vec<TripItem>>>;

    /// Replace the stored list.
    fn save(&mut self, items: &[TripItem]) -> ItineraryResult<()>;
}

/// A pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TripStore for JsonFileStore {
    fn load(&self) -> ItineraryResult<Option<Vec<TripItem>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored trip items");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let items: Vec<TripItem> = serde_json::from_str(&content).map_err(|e| {
            ItineraryError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = items.len(), "loaded trip items");
        Ok(Some(items))
    }

    fn save(&mut self, items: &[TripItem]) -> ItineraryResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| ItineraryError::Serialization(e.to_string()))?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        debug!(path = %self.path.display(), count = items.len(), "saved trip items");
        Ok(())
    }
}

/// Keeps the list in process. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Option<Vec<TripItem>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `items`.
    pub fn with_items(items: Vec<TripItem>) -> Self {
        MemoryStore {
            items: Some(items),
            saves: 0,
        }
    }

    /// Number of times the list has been written.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl TripStore for MemoryStore {
    fn load(&self) -> ItineraryResult<Option<Vec<TripItem>>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[TripItem]) -> ItineraryResult<()> {
        self.items = Some(items.to_vec());
        self.saves += 1;
        Ok(())
    }
}
