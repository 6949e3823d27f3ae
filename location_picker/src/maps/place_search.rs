use crate::maps::{
    Coordinates, GoogleMapsClient, PlacePrediction, PlaceSearch, PlaceSearchText, ResolvedPlace,
    StatusCode,
};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use itertools::Itertools;
use serde::Deserialize;
use shared_kernel::http_client::HttpClient;
use url::Url;

const AUTOCOMPLETE_PATH: &str = "/place/autocomplete/json";
const PLACE_DETAILS_PATH: &str = "/place/details/json";

#[derive(Deserialize, Debug)]
struct AutocompletePrediction {
    description: String,
    place_id: Option<String>,
}

#[derive(Deserialize, Debug)]
struct AutocompleteResponse {
    status: StatusCode,
    #[serde(default)]
    predictions: Vec<AutocompletePrediction>,
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize, Debug)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize, Debug)]
struct PlaceDetails {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Deserialize, Debug)]
struct PlaceDetailsResponse {
    status: StatusCode,
    result: Option<PlaceDetails>,
    error_message: Option<String>,
}

#[async_trait]
impl PlaceSearch for GoogleMapsClient {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn autocomplete(&self, text: &PlaceSearchText) -> anyhow::Result<Vec<PlacePrediction>> {
        let url = Url::parse_with_params(
            &format!("{}{}", self.host(), AUTOCOMPLETE_PATH),
            &[("key", self.api_key()), ("input", text.as_ref())],
        )
        .context("Failed to parse url")?;

        let response = HttpClient::get_json::<AutocompleteResponse>(url).await?;
        if !response.status.is_success() {
            return Err(anyhow!(
                "Place autocomplete failed with {:?}: {}",
                response.status,
                response.error_message.unwrap_or_default()
            ));
        }

        // Predictions without a place id cannot be resolved to coordinates.
        Ok(response
            .predictions
            .into_iter()
            .filter_map(|prediction| {
                prediction.place_id.map(|place_id| PlacePrediction {
                    place_id,
                    description: prediction.description,
                })
            })
            .collect_vec())
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn place_details(&self, place_id: &str) -> anyhow::Result<ResolvedPlace> {
        let url = Url::parse_with_params(
            &format!("{}{}", self.host(), PLACE_DETAILS_PATH),
            &[
                ("key", self.api_key()),
                ("place_id", place_id),
                ("fields", "formatted_address,geometry"),
            ],
        )
        .context("Failed to parse url")?;

        let response = HttpClient::get_json::<PlaceDetailsResponse>(url).await?;
        match (response.status, response.result) {
            (StatusCode::OK, Some(result)) => Ok(ResolvedPlace {
                position: Coordinates {
                    latitude: result.geometry.location.lat,
                    longitude: result.geometry.location.lng,
                },
                formatted_address: result.formatted_address,
            }),
            (status, _) => Err(anyhow!(
                "Place details for {place_id} failed with {status:?}: {}",
                response.error_message.unwrap_or_default()
            )),
        }
    }
}
