//! Hero Gateway - A cache-aside aggregation service for an upstream hero API
//!
//! Serves hero records from a shared cache, falls back to the upstream REST
//! API on a miss, and enriches heroes with attribute profiles for
//! authenticated callers.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod heroes;
pub mod models;
pub mod tasks;
pub mod upstream;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
