//! The trip item list and its mutations.
//!
//! `Itinerary` owns the list and the store behind it. Every mutation
//! validates, keeps the list chronological, and writes the whole list back.
//! Items are addressed by id, never by position.

use std::collections::HashSet;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ItineraryError, ItineraryResult};
use crate::query::sort_chronologically;
use crate::seed::seed_items;
use crate::store::TripStore;
use crate::trip_item::TripItem;

pub struct Itinerary<S: TripStore> {
    store: S,
    items: Vec<TripItem>,
    seeded: bool,
}

impl<S: TripStore> Itinerary<S> {
    /// Load the stored list. A missing, unreadable or invalid list falls back to
    /// the seed itinerary; this never fails. A list is invalid when any item
    /// fails validation or two items share an id.
    pub fn open(store: S) -> Self {
        let (mut items, seeded) = match store.load() {
            Ok(Some(items)) => match check_stored(&items) {
                Ok(()) => (items, false),
                Err(e) => {
                    warn!(error = %e, "stored trip items are invalid, using seed itinerary");
                    (seed_items(), true)
                }
            },
            Ok(None) => (seed_items(), true),
            Err(e) => {
                warn!(error = %e, "could not read stored trip items, using seed itinerary");
                (seed_items(), true)
            }
        };

        sort_chronologically(&mut items);
        Itinerary {
            store,
            items,
            seeded,
        }
    }

    /// Items in chronological order.
    pub fn items(&self) -> &[TripItem] {
        &self.items
    }

    /// Whether the list came from the seed itinerary rather than the store.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, id: Uuid) -> Option<&TripItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolve an id from its full string form or a unique prefix of it.
    pub fn find(&self, id_or_prefix: &str) -> ItineraryResult<&TripItem> {
        let needle = id_or_prefix.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(ItineraryError::UnknownId(id_or_prefix.to_string()));
        }

        let mut matches = self
            .items
            .iter()
            .filter(|item| item.id.to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item),
            (Some(_), Some(_)) => Err(ItineraryError::AmbiguousId(id_or_prefix.to_string())),
            (None, _) => Err(ItineraryError::UnknownId(id_or_prefix.to_string())),
        }
    }

    /// Insert a new item and persist. Returns the item's id.
    pub fn add(&mut self, item: TripItem) -> ItineraryResult<Uuid> {
        item.validate()?;
        let id = item.id;
        if self.get(id).is_some() {
            return Err(ItineraryError::DuplicateId(id));
        }

        let mut items = self.items.clone();
        items.push(item);
        self.commit(items)?;

        info!(%id, "added trip item");
        Ok(id)
    }

    /// Replace the item with `id`. The replacement keeps `id` whatever id it
    /// carried.
    pub fn update(&mut self, id: Uuid, mut item: TripItem) -> ItineraryResult<()> {
        item.id = id;
        item.validate()?;

        let mut items = self.items.clone();
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(ItineraryError::ItemNotFound(id))?;
        *slot = item;
        self.commit(items)?;

        info!(%id, "updated trip item");
        Ok(())
    }

    /// Remove the item with `id` and persist. Returns the removed item.
    pub fn remove(&mut self, id: Uuid) -> ItineraryResult<TripItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItineraryError::ItemNotFound(id))?;

        let mut items = self.items.clone();
        let removed = items.remove(index);
        self.commit(items)?;

        info!(%id, "removed trip item");
        Ok(removed)
    }

    /// Replace the whole list with the seed itinerary and persist.
    pub fn reset(&mut self) -> ItineraryResult<()> {
        self.commit(seed_items())?;
        self.seeded = true;

        info!("reset to seed itinerary");
        Ok(())
    }

    /// Sort and save `items`, then make them current. On a failed save the
    /// current list is left as it was.
    fn commit(&mut self, mut items: Vec<TripItem>) -> ItineraryResult<()> {
        sort_chronologically(&mut items);
        self.store.save(&items)?;
        self.items = items;
        self.seeded = false;
        Ok(())
    }
}

fn check_stored(items: &[TripItem]) -> ItineraryResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id) {
            return Err(ItineraryError::DuplicateId(item.id));
        }
    }
    Ok(())
}
