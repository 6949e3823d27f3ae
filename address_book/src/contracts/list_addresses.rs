use crate::contracts::AddressBookSubSystem;
use crate::data_transfer::AddressRecord;

impl AddressBookSubSystem {
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn list_addresses(&self) -> Vec<AddressRecord> {
        self.store.all().await
    }
}
