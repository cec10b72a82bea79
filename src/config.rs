//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default upstream hero API.
pub const DEFAULT_HERO_API_BASE_URL: &str = "https://hahow-recruit.herokuapp.com";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream hero API
    pub hero_api_base_url: String,
    /// Upstream connect/response timeout in milliseconds
    pub http_timeout_ms: u64,
    /// Maximum redirects followed by the upstream client
    pub http_max_redirects: usize,
    /// Redis host; the in-memory backend is used when unset
    pub redis_host: Option<String>,
    /// Redis port
    pub redis_port: u16,
    /// Capacity of the in-memory backend
    pub cache_max_entries: usize,
    /// In-memory backend sweep interval in seconds
    pub cache_cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `HERO_API_BASE_URL` - Upstream base URL (default: hahow-recruit)
    /// - `HTTP_TIMEOUT_MS` - Upstream timeout (default: 5000)
    /// - `HTTP_MAX_REDIRECTS` - Upstream redirect limit (default: 5)
    /// - `REDIS_HOST` - Redis host (default: unset, in-memory cache)
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `CACHE_MAX_ENTRIES` - In-memory capacity (default: 1000)
    /// - `CACHE_CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            hero_api_base_url: env::var("HERO_API_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.hero_api_base_url),
            http_timeout_ms: parse_var("HTTP_TIMEOUT_MS").unwrap_or(defaults.http_timeout_ms),
            http_max_redirects: parse_var("HTTP_MAX_REDIRECTS")
                .unwrap_or(defaults.http_max_redirects),
            redis_host: env::var("REDIS_HOST").ok().filter(|v| !v.is_empty()),
            redis_port: parse_var("REDIS_PORT").unwrap_or(defaults.redis_port),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            cache_cleanup_interval: parse_var("CACHE_CLEANUP_INTERVAL")
                .unwrap_or(defaults.cache_cleanup_interval),
        }
    }

    /// Upstream timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    /// Redis connection URL, if a Redis host is configured.
    pub fn redis_url(&self) -> Option<String> {
        self.redis_host
            .as_ref()
            .map(|host| format!("redis://{}:{}/", host, self.redis_port))
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            hero_api_base_url: DEFAULT_HERO_API_BASE_URL.to_string(),
            http_timeout_ms: 5000,
            http_max_redirects: 5,
            redis_host: None,
            redis_port: 6379,
            cache_max_entries: 1000,
            cache_cleanup_interval: 60,
        }
    }
}
