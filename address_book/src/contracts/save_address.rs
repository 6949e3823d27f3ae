use crate::contracts::AddressBookSubSystem;
use crate::data_transfer::{AddressInput, AddressRecord, ValidAddressInput};
use crate::errors::AddressBookError;

impl AddressBookSubSystem {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn save_address(
        &self,
        input: AddressInput,
    ) -> Result<AddressRecord, AddressBookError> {
        let input = ValidAddressInput::try_from(input).map_err(|err| {
            tracing::debug!("Rejected address input: {err}");
            AddressBookError::Validation
        })?;
        let record = self.store.insert(input).await;
        tracing::info!(id = %record.id, "Address saved");
        Ok(record)
    }
}
