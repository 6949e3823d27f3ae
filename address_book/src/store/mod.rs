use crate::data_transfer::{AddressId, AddressRecord, ValidAddressInput};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

const FIRST_ID: u64 = 1;

/// Process-local record storage. Ids come from a counter that only moves
/// forward, so iterating the map in key order yields insertion order.
pub(crate) struct AddressStore {
    next_id: AtomicU64,
    records: RwLock<BTreeMap<AddressId, AddressRecord>>,
}

impl Default for AddressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(FIRST_ID),
            records: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn all(&self) -> Vec<AddressRecord> {
        self.records.read().await.values().cloned().collect_vec()
    }

    pub async fn insert(&self, input: ValidAddressInput) -> AddressRecord {
        let mut records = self.records.write().await;
        // Taken under the write lock so id order matches insertion order.
        let id = AddressId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let record = AddressRecord {
            id,
            address: input.address,
            category: input.category,
        };
        records.insert(id, record.clone());
        record
    }

    pub async fn remove(&self, id: AddressId) -> Option<AddressRecord> {
        self.records.write().await.remove(&id)
    }
}
