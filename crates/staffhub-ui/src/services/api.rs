//! HTTP plumbing shared by the service clients (REST).
//!
//! # Design
//! - The bearer credential is read from session storage on every send, so a
//!   login or logout between two calls changes the very next request.
//! - Only transport/server failures surface as [`ApiError`]; softened
//!   outcomes (the details 404) are classified in the service wrappers.

use crate::app::session::BrowserSession;
use crate::core::logic::bearer_header;
use crate::core::session::credential_token;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use staffhub_api_models::ApiMessage;
use thiserror::Error;

/// Failure of one dispatched request. The caller renders the message inline
/// and does not retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
    /// The response body did not decode as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code when the server produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Extract a display message from an error body, which is either a
/// `{ "message": ... }` document or plain text.
fn body_message(status: u16, body: &str) -> String {
    if let Ok(ApiMessage { message }) = serde_json::from_str::<ApiMessage>(body) {
        return message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {status}")
    } else {
        trimmed.to_string()
    }
}

/// HTTP client bound to one service base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (scheme, host, service prefix).
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(req: Request) -> Request {
        match bearer_header(credential_token(&BrowserSession).as_deref()) {
            Some(value) => req.header("Authorization", &value),
            None => req,
        }
    }

    async fn send(req: Request) -> Result<Response, ApiError> {
        Self::authorize(req)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::Status {
            status,
            message: body_message(status, &body),
        }
    }

    async fn expect_success(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// `GET path`, returning the raw response for status-aware callers.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Response, ApiError> {
        Self::send(Request::get(&self.url(path))).await
    }

    /// `GET path` decoded as JSON.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::expect_success(self.get_raw(path).await?).await?;
        Self::decode(response).await
    }

    /// `POST path` with a JSON body, decoded as JSON.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = Request::post(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = Self::expect_success(Self::send(req).await?).await?;
        Self::decode(response).await
    }

    /// `POST path` with a JSON body, returning the plain-text acknowledgement
    /// the account-creation endpoints answer with.
    pub(crate) async fn post_for_text<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let req = Request::post(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = Self::expect_success(Self::send(req).await?).await?;
        response
            .text()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// `PUT path` with a JSON body, decoded as JSON.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = Request::put(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = Self::expect_success(Self::send(req).await?).await?;
        Self::decode(response).await
    }

    /// Decode a success response body as JSON (for status-aware callers that
    /// already branched on the status).
    pub(crate) async fn decode_json<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        Self::decode(response).await
    }

    /// Build the error for a non-success response (for status-aware callers).
    pub(crate) async fn error_from(response: Response) -> ApiError {
        Self::status_error(response).await
    }
}
