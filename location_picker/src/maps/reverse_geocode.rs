use crate::maps::{Coordinates, GoogleMapsClient, ReverseGeocoder, StatusCode};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::Deserialize;
use shared_kernel::http_client::HttpClient;
use url::Url;

const GEOCODE_PATH: &str = "/geocode/json";

#[derive(Deserialize, Debug)]
struct GeocodeResult {
    formatted_address: String,
}

#[derive(Deserialize, Debug)]
struct GeocodeResponse {
    status: StatusCode,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[async_trait]
impl ReverseGeocoder for GoogleMapsClient {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn formatted_address(&self, position: Coordinates) -> anyhow::Result<Option<String>> {
        let url = Url::parse_with_params(
            &format!("{}{}", self.host(), GEOCODE_PATH),
            &[
                ("latlng", position.to_string().as_str()),
                ("key", self.api_key()),
            ],
        )
        .context("Failed to parse url")?;

        let response = HttpClient::get_json::<GeocodeResponse>(url).await?;
        if !response.status.is_success() {
            return Err(anyhow!(
                "Reverse geocoding {position} failed with {:?}: {}",
                response.status,
                response.error_message.unwrap_or_default()
            ));
        }

        Ok(response
            .results
            .into_iter()
            .next()
            .map(|result| result.formatted_address))
    }
}
