use crate::maps::Coordinates;
use anyhow::Context;
use secrecy::Secret;
use serde::Deserialize;
use shared_kernel::configuration::config;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// Root of the address store API, including the `/api` prefix.
    pub base_url: Url,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationSearcherConfig {
    pub host: String,
    pub api_key: Secret<String>,
}

/// Stands in for the device's location service. Leaving the section out
/// means the device has none.
#[derive(Debug, Deserialize, Clone)]
pub struct GeolocationSettings {
    pub permission_granted: bool,
    pub position: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub store: StoreSettings,
    pub location: LocationSearcherConfig,
    pub geolocation: Option<GeolocationSettings>,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Settings> {
        config::<Settings>().context("Failed to deserialize settings to location_picker settings")
    }
}
