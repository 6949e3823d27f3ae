use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use address_book::errors::AddressBookError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl From<AddressBookError> for ApiError {
    fn from(value: AddressBookError) -> Self {
        match value {
            AddressBookError::Validation => ApiError::BadRequest(value.to_string()),
            AddressBookError::NotFound(_) => ApiError::NotFound(value.to_string()),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let err_json = json!({ "error": self.to_string() });
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err_json)
    }
}
