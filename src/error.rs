use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for HubSpot API operations.
///
/// - `MissingToken` — client built without a token, before any network call
/// - `InvalidHeader` / `InvalidUrl` — construction-time configuration errors
/// - `Encode` — payload could not be turned into a query string or JSON body
/// - `RequestFailed` — network/transport errors (wraps `reqwest::Error`)
/// - `Api` — any non-2xx status code, with the raw response body
/// - `Decode` — a 2xx body that does not match the expected shape
#[derive(Debug, Error)]
pub enum HubSpotError {
    #[error("an API token must be provided to call the HubSpot API")]
    MissingToken,

    #[error("Invalid token header value: {0}")]
    InvalidHeader(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("{status}: {body}")]
    Api { status: u16, body: String },

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HubSpotError {
    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            HubSpotError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Best-effort parse of an `Api` error body into the structured HubSpot
    /// error shape. Returns `None` for other variants or non-JSON bodies.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        match self {
            HubSpotError::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HubSpotError>;

/// Error body returned by the HubSpot API for non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// One entry of [`ErrorResponse::errors`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Recover the structured body from an error returned by the client.
    pub fn from_error(err: &HubSpotError) -> Option<Self> {
        err.error_response()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "failed to serialize ErrorResponse: {e}"),
        }
    }
}

impl std::error::Error for ErrorResponse {}
