use crate::config::GeolocationSettings;
use crate::maps::Coordinates;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    Unavailable,
    #[error("Geolocation is not supported")]
    Unsupported,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

pub struct ConfiguredGeolocator {
    settings: Option<GeolocationSettings>,
}

impl ConfiguredGeolocator {
    pub fn new(settings: Option<GeolocationSettings>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Geolocator for ConfiguredGeolocator {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        let settings = self
            .settings
            .as_ref()
            .ok_or(GeolocationError::Unsupported)?;
        if !settings.permission_granted {
            return Err(GeolocationError::PermissionDenied);
        }
        settings.position.ok_or(GeolocationError::Unavailable)
    }
}
