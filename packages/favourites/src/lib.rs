#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Saved parking spots.
//!
//! Two independent records live in a [`KeyValueStore`]:
//!
//! - [`FAVOURITES_KEY`]: a JSON array of favourite parking IDs, without
//!   duplicates.
//! - [`CACHE_KEY`]: a JSON object mapping parking ID to the last seen
//!   [`ParkingSubmission`], so saved spots render without a network call.
//!
//! Every operation reads the whole record, modifies it and writes it back.
//! There is no guard against overlapping callers; the last write wins.
//! Storage and decode failures are logged and degrade to an empty result
//! or a no-op, so a broken store never reaches the caller.

pub mod store;

use std::collections::BTreeMap;

use hotspot_models::{ParkingId, ParkingSubmission};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Storage key of the favourite ID list.
pub const FAVOURITES_KEY: &str = "parkingFavourites";

/// Storage key of the parking snapshot cache.
pub const CACHE_KEY: &str = "parkingDataCache";

/// Parking snapshots keyed by ID.
pub type ParkingCache = BTreeMap<ParkingId, ParkingSubmission>;

/// Favourites and cached parking data over a storage backend.
#[derive(Debug)]
pub struct Favourites<S> {
    store: S,
}

impl<S: KeyValueStore> Favourites<S> {
    /// Wraps a storage backend.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying backend.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Favourite IDs in the order they were added.
    #[must_use]
    pub fn favourite_ids(&self) -> Vec<ParkingId> {
        self.read_json(FAVOURITES_KEY).unwrap_or_default()
    }

    /// Whether `parking_id` is a favourite.
    #[must_use]
    pub fn is_favourite(&self, parking_id: ParkingId) -> bool {
        self.favourite_ids().contains(&parking_id)
    }

    /// Adds `parking_id`. Adding an existing favourite changes nothing.
    pub fn add(&self, parking_id: ParkingId) {
        let mut ids = self.favourite_ids();
        if !ids.contains(&parking_id) {
            ids.push(parking_id);
            self.write_json(FAVOURITES_KEY, &ids);
        }
    }

    /// Removes `parking_id` if present.
    pub fn remove(&self, parking_id: ParkingId) {
        let ids: Vec<ParkingId> = self
            .favourite_ids()
            .into_iter()
            .filter(|id| *id != parking_id)
            .collect();
        self.write_json(FAVOURITES_KEY, &ids);
    }

    /// Flips `parking_id` and returns whether it is now a favourite.
    pub fn toggle(&self, parking_id: ParkingId) -> bool {
        if self.is_favourite(parking_id) {
            self.remove(parking_id);
            false
        } else {
            self.add(parking_id);
            true
        }
    }

    /// All cached parking snapshots.
    #[must_use]
    pub fn cached_parking_data(&self) -> ParkingCache {
        self.read_json(CACHE_KEY).unwrap_or_default()
    }

    /// Replaces the whole snapshot cache.
    pub fn set_cached_parking_data(&self, data: &ParkingCache) {
        self.write_json(CACHE_KEY, data);
    }

    /// Stores or refreshes the snapshot of a single submission.
    pub fn cache_submission(&self, submission: &ParkingSubmission) {
        let mut cache = self.cached_parking_data();
        cache.insert(submission.parking_id, submission.clone());
        self.set_cached_parking_data(&cache);
    }

    /// Favourites that have a cached snapshot, in favourite order. IDs with
    /// no snapshot are skipped.
    #[must_use]
    pub fn saved_spots(&self) -> Vec<ParkingSubmission> {
        let mut cache = self.cached_parking_data();
        self.favourite_ids()
            .into_iter()
            .filter_map(|id| cache.remove(&id))
            .collect()
    }

    /// Removes both the favourites and the snapshot cache.
    pub fn clear_all(&self) {
        for key in [FAVOURITES_KEY, CACHE_KEY] {
            if let Err(e) = self.store.remove_item(key) {
                log::error!("Error clearing favourite data ({key}): {e}");
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let stored = match self.store.get_item(key) {
            Ok(stored) => stored?,
            Err(e) => {
                log::error!("Error reading {key} from storage: {e}");
                return None;
            }
        };

        serde_json::from_str(&stored)
            .map_err(|e| log::error!("Error decoding {key} from storage: {e}"))
            .ok()
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::error!("Error encoding {key}: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set_item(key, &encoded) {
            log::error!("Error saving {key} to storage: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(parking_id: ParkingId, suburb: &str) -> ParkingSubmission {
        ParkingSubmission {
            parking_id,
            address: format!("{parking_id} High St"),
            suburb: suburb.to_string(),
            postcode: "3181".to_string(),
            parking_type: "on-street".to_string(),
            lighting: Some(2),
            cctv: None,
            created_at: Some("2025-07-04 09:00:00".to_string()),
            facilities: vec![],
        }
    }

    /// A backend that fails every call, like disabled browser storage.
    struct DisabledStore;

    impl KeyValueStore for DisabledStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable {
                message: "disabled".to_string(),
            })
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable {
                message: "quota exceeded".to_string(),
            })
        }

        fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable {
                message: "disabled".to_string(),
            })
        }
    }

    #[test]
    fn add_is_idempotent() {
        let favourites = Favourites::new(MemoryStore::new());
        favourites.add(3);
        favourites.add(1);
        favourites.add(3);
        assert_eq!(favourites.favourite_ids(), vec![3, 1]);
        assert!(favourites.is_favourite(1));
        assert!(!favourites.is_favourite(2));
    }

    #[test]
    fn remove_drops_only_that_id() {
        let favourites = Favourites::new(MemoryStore::new());
        for id in [5, 6, 7] {
            favourites.add(id);
        }
        favourites.remove(6);
        favourites.remove(42);
        assert_eq!(favourites.favourite_ids(), vec![5, 7]);
    }

    #[test]
    fn toggle_reports_new_state() {
        let favourites = Favourites::new(MemoryStore::new());
        assert!(favourites.toggle(9));
        assert!(favourites.is_favourite(9));
        assert!(!favourites.toggle(9));
        assert!(!favourites.is_favourite(9));
    }

    #[test]
    fn stored_encoding_matches_browser_format() {
        let favourites = Favourites::new(MemoryStore::new());
        favourites.add(12);
        favourites.add(4);
        favourites.cache_submission(&submission(12, "St Kilda"));

        let ids = favourites.store().get_item(FAVOURITES_KEY).unwrap().unwrap();
        assert_eq!(ids, "[12,4]");

        let cache = favourites.store().get_item(CACHE_KEY).unwrap().unwrap();
        let cache: serde_json::Value = serde_json::from_str(&cache).unwrap();
        assert_eq!(cache["12"]["suburb"], "St Kilda");
        assert_eq!(cache["12"]["type"], "on-street");
    }

    #[test]
    fn reads_values_written_by_the_web_client() {
        let store = MemoryStore::new();
        store.set_item(FAVOURITES_KEY, "[8, 2]").unwrap();
        store
            .set_item(
                CACHE_KEY,
                r#"{"8":{"parking_id":8,"address":"8 Chapel St","suburb":"Windsor","postcode":"3181","type":"secure","lighting":null,"cctv":true,"created_at":"2025-01-01","facilities":[]}}"#,
            )
            .unwrap();

        let favourites = Favourites::new(store);
        assert_eq!(favourites.favourite_ids(), vec![8, 2]);
        assert_eq!(favourites.cached_parking_data()[&8].suburb, "Windsor");
    }

    #[test]
    fn cache_submission_upserts() {
        let favourites = Favourites::new(MemoryStore::new());
        favourites.cache_submission(&submission(1, "Prahran"));
        favourites.cache_submission(&submission(2, "Windsor"));
        favourites.cache_submission(&submission(1, "South Yarra"));

        let cache = favourites.cached_parking_data();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache[&1].suburb, "South Yarra");
    }

    #[test]
    fn saved_spots_follow_favourite_order_and_skip_uncached() {
        let favourites = Favourites::new(MemoryStore::new());
        favourites.cache_submission(&submission(1, "Prahran"));
        favourites.cache_submission(&submission(2, "Windsor"));
        favourites.cache_submission(&submission(3, "Richmond"));
        favourites.add(3);
        favourites.add(99);
        favourites.add(1);

        let suburbs: Vec<String> = favourites
            .saved_spots()
            .into_iter()
            .map(|s| s.suburb)
            .collect();
        assert_eq!(suburbs, vec!["Richmond", "Prahran"]);
    }

    #[test]
    fn clear_all_removes_both_records() {
        let favourites = Favourites::new(MemoryStore::new());
        favourites.add(1);
        favourites.cache_submission(&submission(1, "Prahran"));

        favourites.clear_all();

        assert!(favourites.favourite_ids().is_empty());
        assert!(favourites.cached_parking_data().is_empty());
        assert!(favourites.store().get_item(FAVOURITES_KEY).unwrap().is_none());
        assert!(favourites.store().get_item(CACHE_KEY).unwrap().is_none());
    }

    #[test]
    fn corrupt_records_read_as_empty() {
        let store = MemoryStore::new();
        store.set_item(FAVOURITES_KEY, "not json").unwrap();
        store.set_item(CACHE_KEY, "[1,2,3]").unwrap();

        let favourites = Favourites::new(store);
        assert!(favourites.favourite_ids().is_empty());
        assert!(favourites.cached_parking_data().is_empty());
    }

    #[test]
    fn disabled_storage_degrades_silently() {
        let favourites = Favourites::new(DisabledStore);
        favourites.add(1);
        favourites.remove(1);
        favourites.cache_submission(&submission(1, "Prahran"));
        favourites.clear_all();

        assert!(favourites.favourite_ids().is_empty());
        assert!(!favourites.is_favourite(1));
        assert!(favourites.toggle(1));
        assert!(favourites.cached_parking_data().is_empty());
        assert!(favourites.saved_spots().is_empty());
    }
}
