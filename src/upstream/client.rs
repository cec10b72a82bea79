//! Upstream Hero Client
//!
//! Each call is: HTTP request, shape validation, typed error mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{HeroError, Result};
use crate::models::{Hero, HeroProfile};
use crate::upstream::validator::{self, ShapeError};
use crate::upstream::HeroApi;

/// HTTP client for the upstream hero API.
#[derive(Debug, Clone)]
pub struct UpstreamHeroClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamHeroClient {
    /// Creates a client for `base_url` with bounded timeouts and redirects.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        max_redirects: usize,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .redirect(redirect::Policy::limited(max_redirects))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Self::new(
            config.hero_api_base_url.clone(),
            config.http_timeout(),
            config.http_max_redirects,
        )
    }

    fn heroes_url(&self) -> String {
        format!("{}/heroes", self.base_url)
    }

    fn auth_url(&self) -> String {
        format!("{}/auth", self.base_url)
    }

    /// GETs `url` and decodes the JSON body.
    ///
    /// A 404 maps to `NotFound` only when `hero_id` is given.
    async fn fetch_json(&self, url: &str, hero_id: Option<&str>) -> Result<Value> {
        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "upstream request failed");
            HeroError::UpstreamUnavailable(format!("Request to upstream {} failed: {}", url, e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = hero_id {
                debug!(url = %url, "upstream reported hero not found");
                return Err(HeroError::NotFound(format!("Hero with id {} not found", id)));
            }
        }
        if !status.is_success() {
            warn!(url = %url, status = %status, "upstream responded with error status");
            return Err(HeroError::UpstreamUnavailable(format!(
                "Upstream {} responded with {}",
                url, status
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            warn!(url = %url, error = %e, "failed to read upstream body");
            if e.is_decode() {
                mismatch(url, &e.to_string())
            } else {
                HeroError::UpstreamUnavailable(format!(
                    "Reading response from upstream {} failed: {}",
                    url, e
                ))
            }
        })
    }
}

fn mismatch(url: &str, reason: &str) -> HeroError {
    HeroError::UpstreamShapeMismatch(format!(
        "Invalid response format from upstream {}: {}",
        url, reason
    ))
}

fn shape_error(url: &str, e: ShapeError) -> HeroError {
    warn!(url = %url, error = %e, "upstream payload failed shape validation");
    mismatch(url, &e.to_string())
}

#[async_trait]
impl HeroApi for UpstreamHeroClient {
    async fn list_heroes(&self) -> Result<Vec<Hero>> {
        let url = self.heroes_url();
        let body = self.fetch_json(&url, None).await?;
        validator::validate_heroes(&body).map_err(|e| shape_error(&url, e))
    }

    async fn get_hero(&self, id: &str) -> Result<Hero> {
        let url = format!("{}/{}", self.heroes_url(), id);
        let body = self.fetch_json(&url, Some(id)).await?;
        validator::validate_hero(&body).map_err(|e| shape_error(&url, e))
    }

    async fn get_hero_profile(&self, id: &str) -> Result<HeroProfile> {
        let url = format!("{}/{}/profile", self.heroes_url(), id);
        let body = self.fetch_json(&url, Some(id)).await?;
        validator::validate_profile(&body).map_err(|e| shape_error(&url, e))
    }

    async fn authenticate(&self, username: &str, password: &str) -> bool {
        let url = self.auth_url();
        let result = self
            .http
            .post(&url)
            .json(&json!({ "name": username, "password": password }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!(status = %response.status(), "upstream rejected credentials");
                false
            }
            Err(e) => {
                warn!(url = %url, error = %e, "upstream authentication request failed");
                false
            }
        }
    }
}
