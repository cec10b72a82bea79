//! Hero Repository
//!
//! Cache-aside reads: check the cache, fetch from upstream on a miss, write
//! the fully formed result back. Upstream errors pass through unchanged.
//!
//! There is no single-flight guard on the miss path; concurrent cold reads
//! of one key each call upstream and the last write wins.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::CacheService;
use crate::error::Result;
use crate::models::Hero;
use crate::upstream::HeroApi;

pub const HEROES_KEY: &str = "heroes";
pub const HEROES_WITH_PROFILE_KEY: &str = "heroes_with_profile";

pub fn hero_key(id: &str) -> String {
    format!("hero_{}", id)
}

pub fn hero_with_profile_key(id: &str) -> String {
    format!("hero_with_profile_{}", id)
}

/// Key for a cached credential hash; kept apart from the hero keys so no
/// username can collide with them.
pub fn credential_key(username: &str) -> String {
    format!("credential_{}", username)
}

// == Hero Repository ==
#[async_trait]
pub trait HeroRepository: Send + Sync {
    async fn get_all_heroes(&self) -> Result<Vec<Hero>>;

    /// Every hero with its profile. Fails entirely if any profile fails.
    async fn get_all_heroes_with_profile(&self) -> Result<Vec<Hero>>;

    async fn get_hero_by_id(&self, id: &str) -> Result<Hero>;

    async fn get_hero_with_profile_by_id(&self, id: &str) -> Result<Hero>;
}

/// `HeroRepository` over a `CacheService` and a `HeroApi`.
#[derive(Clone)]
pub struct CachedHeroRepository {
    cache: CacheService,
    api: Arc<dyn HeroApi>,
}

impl CachedHeroRepository {
    pub fn new(cache: CacheService, api: Arc<dyn HeroApi>) -> Self {
        Self { cache, api }
    }

    async fn read_through<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(cached) = self.cache.get_json::<T>(key).await {
            return Ok(cached);
        }

        debug!(key = %key, "fetching from upstream");
        let value = fetch().await?;
        self.cache.set_json(key, &value, None).await;
        Ok(value)
    }

    /// Lists heroes and fans out one profile fetch per hero concurrently.
    ///
    /// The first failing fetch fails the whole call and drops the rest.
    async fn fetch_all_with_profile(&self) -> Result<Vec<Hero>> {
        let heroes = self.api.list_heroes().await?;

        let profiles =
            try_join_all(heroes.iter().map(|hero| self.api.get_hero_profile(&hero.id))).await?;

        Ok(heroes
            .into_iter()
            .zip(profiles)
            .map(|(hero, profile)| hero.with_profile(profile))
            .collect())
    }

    async fn fetch_with_profile(&self, id: &str) -> Result<Hero> {
        let (hero, profile) =
            futures::try_join!(self.api.get_hero(id), self.api.get_hero_profile(id))?;
        Ok(hero.with_profile(profile))
    }
}

#[async_trait]
impl HeroRepository for CachedHeroRepository {
    async fn get_all_heroes(&self) -> Result<Vec<Hero>> {
        self.read_through(HEROES_KEY, || self.api.list_heroes()).await
    }

    async fn get_all_heroes_with_profile(&self) -> Result<Vec<Hero>> {
        self.read_through(HEROES_WITH_PROFILE_KEY, || self.fetch_all_with_profile())
            .await
    }

    async fn get_hero_by_id(&self, id: &str) -> Result<Hero> {
        self.read_through(&hero_key(id), || self.api.get_hero(id)).await
    }

    async fn get_hero_with_profile_by_id(&self, id: &str) -> Result<Hero> {
        self.read_through(&hero_with_profile_key(id), || self.fetch_with_profile(id))
            .await
    }
}
