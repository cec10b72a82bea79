//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::auth::CredentialValidator;
use crate::cache::CacheService;
use crate::error::ApiError;
use crate::heroes::{CachedHeroRepository, HeroService};
use crate::models::requests::validate_hero_id;
use crate::models::{AuthResult, Credentials, Hero, HeroesResponse, StatsResponse};
use crate::upstream::HeroApi;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub heroes: HeroService,
    pub auth: CredentialValidator,
    pub cache: CacheService,
}

impl AppState {
    pub fn new(heroes: HeroService, auth: CredentialValidator, cache: CacheService) -> Self {
        Self {
            heroes,
            auth,
            cache,
        }
    }

    /// Wires the repository, service and validator over one cache and one
    /// upstream client.
    pub fn from_parts(cache: CacheService, api: Arc<dyn HeroApi>) -> Self {
        let repo = CachedHeroRepository::new(cache.clone(), api.clone());
        Self::new(
            HeroService::new(Arc::new(repo)),
            CredentialValidator::new(cache.clone(), api),
            cache,
        )
    }

    /// Anonymous unless both credential headers are present and valid.
    async fn authenticate(&self, headers: &HeaderMap) -> AuthResult {
        match Credentials::from_headers(headers) {
            Some(creds) => self.auth.validate(&creds.username, &creds.password).await,
            None => AuthResult::anonymous(),
        }
    }
}

/// Handler for GET /heroes
pub async fn list_heroes_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<HeroesResponse>, ApiError> {
    let auth = state.authenticate(&headers).await;
    let heroes = state.heroes.find_all(auth.is_authenticated).await?;

    Ok(Json(HeroesResponse::new(heroes)))
}

/// Handler for GET /heroes/:hero_id
pub async fn get_hero_handler(
    State(state): State<AppState>,
    Path(hero_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Hero>, ApiError> {
    if let Some(error_msg) = validate_hero_id(&hero_id) {
        return Err(ApiError::BadRequest(error_msg));
    }

    let auth = state.authenticate(&headers).await;
    let hero = state
        .heroes
        .find_by_id(&hero_id, auth.is_authenticated)
        .await?;

    Ok(Json(hero))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> &'static str {
    "OK"
}

/// Fallback for unmatched routes
pub async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}
