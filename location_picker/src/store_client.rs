use address_book::data_transfer::{AddressId, AddressRecord, AddressText, Category};
use anyhow::Context;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use serde_json::json;
use shared_kernel::http_client::HttpClient;
use url::Url;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressStoreApi: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<AddressRecord>>;

    async fn save(&self, address: AddressText, category: Category) -> anyhow::Result<AddressRecord>;

    async fn delete(&self, id: AddressId) -> anyhow::Result<()>;
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SaveAddressResponse {
    new_address: AddressRecord,
}

#[derive(Deserialize, Debug)]
struct DeleteAddressResponse {
    success: bool,
}

/// HTTP client for the address store API.
pub struct AddressStoreClient {
    base_url: Url,
}

impl AddressStoreClient {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}")).context("Failed to parse url")
    }
}

#[async_trait]
impl AddressStoreApi for AddressStoreClient {
    #[tracing::instrument(err, skip(self), level = "debug")]
    async fn list(&self) -> anyhow::Result<Vec<AddressRecord>> {
        let url = self.endpoint("addresses")?;
        HttpClient::get_json(url)
            .await
            .context("Failed to fetch addresses")
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn save(&self, address: AddressText, category: Category) -> anyhow::Result<AddressRecord> {
        let url = self.endpoint("save-address")?;
        let body = json!({ "address": address, "category": category });
        let response: SaveAddressResponse = HttpClient::post_json(url, &body)
            .await
            .context("Failed to save address")?;
        Ok(response.new_address)
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn delete(&self, id: AddressId) -> anyhow::Result<()> {
        let url = self.endpoint(&format!("delete-address/{id}"))?;
        let response: DeleteAddressResponse = HttpClient::delete_json(url)
            .await
            .with_context(|| format!("Failed to delete address {id}"))?;
        anyhow::ensure!(response.success, "Store refused to delete address {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressStoreApi, AddressStoreClient};
    use address_book::data_transfer::AddressId;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    fn client(server: &MockServer) -> AddressStoreClient {
        AddressStoreClient::new(Url::parse(&server.url("/api/")).unwrap())
    }

    #[tokio::test]
    async fn test_that_listed_addresses_are_decoded_in_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/addresses");
                then.status(200).json_body(json!([
                    { "id": 1, "address": "North Gate", "category": "Home" },
                    { "id": 4, "address": "South Gate", "category": "Office" }
                ]));
            })
            .await;

        let records = client(&server).list().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert!(records[1].address == *"South Gate");
    }

    #[tokio::test]
    async fn test_that_save_posts_address_and_category() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/save-address")
                    .json_body(json!({ "address": "221B Baker Street", "category": "Home" }));
                then.status(200).json_body(json!({
                    "success": true,
                    "message": "Address saved successfully",
                    "newAddress": { "id": 7, "address": "221B Baker Street", "category": "Home" }
                }));
            })
            .await;

        let record = client(&server)
            .save(
                "221B Baker Street".try_into().unwrap(),
                "Home".try_into().unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(record.id, 7);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_that_unknown_ids_fail_to_delete() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/delete-address/999999");
                then.status(404)
                    .json_body(json!({ "error": "Address not found" }));
            })
            .await;

        let result = client(&server).delete(AddressId::new(999999)).await;

        let error = result.unwrap_err();
        assert!(format!("{error:#}").contains("Address not found"));
    }
}
