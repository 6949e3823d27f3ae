use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    OK,
    #[serde(rename = "ZERO_RESULTS")]
    ZeroResults,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    #[serde(rename = "INVALID_REQUEST")]
    InvalidRequest,
    #[serde(rename = "OVER_QUERY_LIMIT")]
    OverQueryLimit,
    #[serde(rename = "REQUEST_DENIED")]
    RequestDenied,
    #[serde(rename = "UNKNOWN_ERROR")]
    UnknownError,
    #[serde(other)]
    Unrecognized,
}

impl StatusCode {
    /// `ZERO_RESULTS` is a successful answer with nothing in it.
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::OK | StatusCode::ZeroResults)
    }
}
