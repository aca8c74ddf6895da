//! Error taxonomy surfaced by the HTTP API.
//!
//! Every failed request answers with a `{ "kind": ..., "detail": ... }` body.
//! The kinds map one-to-one onto collaborator failures; handlers convert
//! collaborator errors with `?` and never invent kinds of their own.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gf_inventory::InventoryError;
use gf_store::StoreError;
use serde::{Deserialize, Serialize};

/// Wire body for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub detail: String,
}

/// Failure cases the API can answer with.
#[derive(Debug)]
pub enum ApiError {
    /// The request names no owner identity; rejected before any collaborator
    /// call.
    MissingOwnerIdentity(String),
    /// An upstream source did not respond or answered with a non-success
    /// status.
    UpstreamUnavailable(String),
    /// An upstream responded but the payload failed schema validation.
    InvalidResponseShape(String),
    /// The persistence layer failed. No partial squad is ever persisted.
    ProfileStoreFailure(String),
}

impl ApiError {
    /// Wire-visible kind, spelled exactly as clients match on it.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingOwnerIdentity(_) => "MissingOwnerIdentity",
            ApiError::UpstreamUnavailable(_) => "UpstreamUnavailable",
            ApiError::InvalidResponseShape(_) => "InvalidResponseShape",
            ApiError::ProfileStoreFailure(_) => "ProfileStoreFailure",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingOwnerIdentity(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamUnavailable(_) | ApiError::InvalidResponseShape(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::ProfileStoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> &str {
        match self {
            ApiError::MissingOwnerIdentity(d)
            | ApiError::UpstreamUnavailable(d)
            | ApiError::InvalidResponseShape(d)
            | ApiError::ProfileStoreFailure(d) => d,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.detail())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            kind: self.kind().to_string(),
            detail: self.detail().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Unavailable(detail) => ApiError::UpstreamUnavailable(detail),
            InventoryError::InvalidShape(detail) => ApiError::InvalidResponseShape(detail),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::ProfileStoreFailure(err.to_string())
    }
}
