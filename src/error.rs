//! Error types for the hero gateway
//!
//! `HeroError` is the taxonomy surfaced by the data access layer. `ApiError`
//! adds the adapter-only failures (bad input, unknown route) on top of it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Error Codes ==
/// Stable machine-readable error codes carried in every error body.
pub mod codes {
    pub const BAD_REQUEST: u32 = 40000;
    pub const NOT_FOUND: u32 = 40400;
    pub const HERO_NOT_FOUND: u32 = 40401;
    pub const INTERNAL_SERVER_ERROR: u32 = 50000;
    pub const THIRDPARTY_SERVER_ERROR: u32 = 50001;
    pub const THIRDPARTY_API_RESPONSE_MISMATCH: u32 = 50002;
}

// == Hero Error Enum ==
/// Errors produced by the upstream client and propagated unchanged by the
/// repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeroError {
    /// Upstream reported the identified hero does not exist
    #[error("{0}")]
    NotFound(String),

    /// Transport failure or a non-2xx, non-404 upstream response
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// Upstream answered 2xx but the payload failed shape validation
    #[error("{0}")]
    UpstreamShapeMismatch(String),
}

impl HeroError {
    /// Machine-readable code for this error.
    pub fn code(&self) -> u32 {
        match self {
            HeroError::NotFound(_) => codes::HERO_NOT_FOUND,
            HeroError::UpstreamUnavailable(_) => codes::THIRDPARTY_SERVER_ERROR,
            HeroError::UpstreamShapeMismatch(_) => codes::THIRDPARTY_API_RESPONSE_MISMATCH,
        }
    }

    /// HTTP status the adapter layer answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            HeroError::NotFound(_) => StatusCode::NOT_FOUND,
            HeroError::UpstreamUnavailable(_) | HeroError::UpstreamShapeMismatch(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for HeroError {
    fn into_response(self) -> Response {
        error_response(
            self.status(),
            ErrorResponse::new(self.code(), self.to_string()),
        )
    }
}

// == Api Error Enum ==
/// Errors the HTTP adapter can answer with.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Hero(#[from] HeroError),

    /// Request input failed validation before reaching the core
    #[error("{0}")]
    BadRequest(String),

    /// No route matched
    #[error("Resource not found")]
    RouteNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Hero(err) => return err.clone().into_response(),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, codes::BAD_REQUEST),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, codes::NOT_FOUND),
        };

        error_response(status, ErrorResponse::new(code, self.to_string()))
    }
}

/// JSON error response. The body also rides along as a response extension
/// so the request-id middleware can stamp it.
fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    let mut response = (status, Json(body.clone())).into_response();
    response.extensions_mut().insert(body);
    response
}

// == Result Type Alias ==
/// Convenience Result type for the data access layer.
pub type Result<T> = std::result::Result<T, HeroError>;
