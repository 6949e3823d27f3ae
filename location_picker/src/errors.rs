use crate::geolocation::GeolocationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Network(#[from] anyhow::Error),
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    Unavailable,
    #[error("Geolocation is not supported")]
    Unsupported,
}

impl From<GeolocationError> for PickerError {
    fn from(value: GeolocationError) -> Self {
        match value {
            GeolocationError::PermissionDenied => PickerError::PermissionDenied,
            GeolocationError::Unavailable => PickerError::Unavailable,
            GeolocationError::Unsupported => PickerError::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PickerError;
    use crate::geolocation::GeolocationError;
    use rstest::rstest;

    #[rstest]
    #[case(GeolocationError::PermissionDenied, "Location permission denied")]
    #[case(GeolocationError::Unavailable, "Location unavailable")]
    #[case(GeolocationError::Unsupported, "Geolocation is not supported")]
    fn test_geolocation_failures_map_to_their_own_kind(
        #[case] error: GeolocationError,
        #[case] message: &str,
    ) {
        let picker_error = PickerError::from(error);
        assert_eq!(picker_error.to_string(), message);
        assert!(!matches!(
            picker_error,
            PickerError::Network(_) | PickerError::Validation(_)
        ));
    }
}
