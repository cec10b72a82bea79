//! Response DTOs for the HTTP adapter
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Hero;

/// Response body for GET /heroes
#[derive(Debug, Clone, Serialize)]
pub struct HeroesResponse {
    pub heroes: Vec<Hero>,
}

impl HeroesResponse {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses, including backend failures
    pub misses: u64,
    /// Number of swallowed backend failures
    pub backend_errors: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            backend_errors: stats.backend_errors,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub code: u32,
    /// Error message describing what went wrong
    pub message: String,
    /// Id of the request that failed, as echoed in `x-request-id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
