use crate::contracts::AddressBookSubSystem;
use crate::data_transfer::{AddressId, AddressRecord};
use crate::errors::AddressBookError;

impl AddressBookSubSystem {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn delete_address(&self, id: AddressId) -> Result<AddressRecord, AddressBookError> {
        self.store
            .remove(id)
            .await
            .ok_or(AddressBookError::NotFound(id))
    }
}
