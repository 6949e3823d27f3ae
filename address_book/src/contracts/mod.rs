use crate::store::AddressStore;
use std::sync::Arc;

pub mod delete_address;
pub mod list_addresses;
pub mod save_address;

/// Entry point to the saved address list. Cloning shares the same store, so
/// build one per process and hand clones to each worker.
#[derive(Clone, Default)]
pub struct AddressBookSubSystem {
    store: Arc<AddressStore>,
}

impl AddressBookSubSystem {
    pub fn new() -> Self {
        Self::default()
    }
}
