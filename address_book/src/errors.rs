use crate::data_transfer::AddressId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    #[error("Address and category are required")]
    Validation,
    #[error("Address not found")]
    NotFound(AddressId),
}
