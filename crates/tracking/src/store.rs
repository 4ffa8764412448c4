use std::collections::HashMap;

use chrono::Utc;
use model::{location::NurseLocation, WithNurseId};
use tokio::sync::RwLock;

use crate::{StoreError, StoreResult};

/// Key used when a client reports or queries without a nurse id. The
/// single-nurse deployment collapses onto this slot.
pub const DEFAULT_NURSE_ID: &str = "default";

/// Last-known position per nurse. One record per id; a write replaces the
/// prior record wholesale. Nothing survives a process restart.
#[derive(Default)]
pub struct LocationStore {
    locations: RwLock<HashMap<String, NurseLocation>>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the reported position under `nurse_id` with a write-time
    /// timestamp and returns the stored record.
    pub async fn update(
        &self,
        nurse_id: &str,
        lat: f64,
        lon: f64,
    ) -> StoreResult<NurseLocation> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(StoreError::InvalidCoordinates);
        }

        let record = NurseLocation::new(lat, lon, Utc::now());
        self.locations
            .write()
            .await
            .insert(nurse_id.to_owned(), record.clone());

        Ok(record)
    }

    pub async fn get(&self, nurse_id: &str) -> StoreResult<NurseLocation> {
        self.locations
            .read()
            .await
            .get(nurse_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Snapshot of every stored record, unordered.
    pub async fn get_all(&self) -> StoreResult<Vec<WithNurseId<NurseLocation>>> {
        let locations = self.locations.read().await;
        if locations.is_empty() {
            return Err(StoreError::NotFound);
        }

        Ok(locations
            .iter()
            .map(|(id, record)| WithNurseId::new(id.clone(), record.clone()))
            .collect())
    }
}
