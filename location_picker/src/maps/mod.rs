use crate::config::LocationSearcherConfig;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use shared_kernel::non_empty_string;

mod place_search;
mod reverse_geocode;
mod status_code;

pub use status_code::StatusCode;

non_empty_string!(PlaceSearchText);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Focal point shown before any location has been resolved.
    pub const DEFAULT_CENTER: Coordinates = Coordinates {
        latitude: 20.5937,
        longitude: 78.9629,
    };
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacePrediction {
    pub place_id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub position: Coordinates,
    pub formatted_address: String,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn autocomplete(&self, text: &PlaceSearchText) -> anyhow::Result<Vec<PlacePrediction>>;

    async fn place_details(&self, place_id: &str) -> anyhow::Result<ResolvedPlace>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// The first formatted address for `position`, or `None` when the
    /// provider has nothing there.
    async fn formatted_address(&self, position: Coordinates) -> anyhow::Result<Option<String>>;
}

/// Google Maps Platform client. Implements both [`PlaceSearch`] and
/// [`ReverseGeocoder`].
pub struct GoogleMapsClient {
    host: String,
    api_key: Secret<String>,
}

impl GoogleMapsClient {
    pub fn new(config: LocationSearcherConfig) -> Self {
        Self {
            host: config.host,
            api_key: config.api_key,
        }
    }

    fn host(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[cfg(test)]
pub(crate) fn test_client(server: &httpmock::MockServer) -> GoogleMapsClient {
    GoogleMapsClient::new(LocationSearcherConfig {
        host: server.base_url(),
        api_key: Secret::new("test-key".to_string()),
    })
}
