use anyhow::Context;
use lazy_static::lazy_static;
use reqwest::{Response, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use url::Url;

lazy_static! {
    // No retry middleware: a replayed POST would store the same record twice.
    static ref CLIENT: ClientWithMiddleware = ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .build();
}

pub struct HttpClient;

#[derive(ThisError, Debug)]
pub enum HttpClientError {
    #[error(transparent)]
    ResponseError(#[from] anyhow::Error),
    #[error("{url} responded with {status}: {message}")]
    UnsuccessfulStatus {
        url: Url,
        status: StatusCode,
        message: String,
    },
}

impl HttpClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HttpClientError::UnsuccessfulStatus { status, .. } => Some(*status),
            HttpClientError::ResponseError(_) => None,
        }
    }
}

/// Error body shape used by the address store API.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpClient {
    async fn send(request: RequestBuilder, url: &Url) -> Result<Response, HttpClientError> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch request from {url}"))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|body| body.error)
            .unwrap_or(body);
        Err(HttpClientError::UnsuccessfulStatus {
            url: url.clone(),
            status,
            message,
        })
    }

    async fn decode<DTO: DeserializeOwned>(response: Response) -> Result<DTO, HttpClientError> {
        let err_msg = format!("Failed to deserialize response from {}", response.url());
        response
            .json::<DTO>()
            .await
            .context(err_msg)
            .map_err(HttpClientError::ResponseError)
    }

    pub async fn get_json<DTO: DeserializeOwned>(url: Url) -> Result<DTO, HttpClientError> {
        let response = Self::send(CLIENT.get(url.clone()), &url).await?;
        Self::decode(response).await
    }

    pub async fn post_json<DTO, Body>(url: Url, body: &Body) -> Result<DTO, HttpClientError>
    where
        DTO: DeserializeOwned,
        Body: Serialize + ?Sized,
    {
        let response = Self::send(CLIENT.post(url.clone()).json(body), &url).await?;
        Self::decode(response).await
    }

    pub async fn delete_json<DTO: DeserializeOwned>(url: Url) -> Result<DTO, HttpClientError> {
        let response = Self::send(CLIENT.delete(url.clone()), &url).await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpClient, HttpClientError};
    use httpmock::prelude::*;
    use reqwest::StatusCode;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use url::Url;

    #[derive(Deserialize, Debug)]
    struct Greeting {
        message: String,
    }

    #[tokio::test]
    async fn test_that_json_bodies_are_decoded() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/greeting");
                then.status(200).json_body(json!({ "message": "hello" }));
            })
            .await;

        let url = Url::parse(&server.url("/greeting")).unwrap();
        let greeting = HttpClient::get_json::<Greeting>(url).await.unwrap();

        assert_eq!(greeting.message, "hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_that_error_bodies_are_surfaced_with_their_status() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/items/9");
                then.status(404).json_body(json!({ "error": "Item not found" }));
            })
            .await;

        let url = Url::parse(&server.url("/items/9")).unwrap();
        let error = HttpClient::delete_json::<Value>(url).await.unwrap_err();

        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        match error {
            HttpClientError::UnsuccessfulStatus { message, .. } => {
                assert_eq!(message, "Item not found")
            }
            other => panic!("unexpected error {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_that_failed_posts_are_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/items");
                then.status(503).body("unavailable");
            })
            .await;

        let url = Url::parse(&server.url("/items")).unwrap();
        let result = HttpClient::post_json::<Value, _>(url, &json!({ "name": "x" })).await;

        assert!(result.is_err());
        mock.assert_hits_async(1).await;
    }
}
