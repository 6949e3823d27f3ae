use serde::{Deserialize, Serialize};
use shared_kernel::{non_empty_string, numeric_key};

numeric_key!(AddressId);

non_empty_string!(AddressText);
non_empty_string!(Category);

impl Category {
    /// Labels offered by the picker. The store accepts any non-empty label.
    pub const SUGGESTED: [&'static str; 3] = ["Home", "Office", "Friends & Family"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: AddressId,
    pub address: AddressText,
    pub category: Category,
}

/// Raw create request. Either field may be absent or blank until validated.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AddressInput {
    pub address: Option<String>,
    pub category: Option<String>,
}

impl AddressInput {
    pub fn new(address: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            category: Some(category.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ValidAddressInput {
    pub address: AddressText,
    pub category: Category,
}

impl TryFrom<AddressInput> for ValidAddressInput {
    type Error = String;

    fn try_from(value: AddressInput) -> Result<Self, Self::Error> {
        let address = AddressText::try_from(value.address.unwrap_or_default())?;
        let category = Category::try_from(value.category.unwrap_or_default())?;
        Ok(ValidAddressInput { address, category })
    }
}
