//! In-crate fakes for the cache and upstream seams.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::cache::{BackendError, CacheBackend};
use crate::error::{HeroError, Result};
use crate::models::{Hero, HeroProfile};
use crate::upstream::HeroApi;

pub fn hero(id: &str, name: &str) -> Hero {
    Hero {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("http://hahow.com/image{}.jpg", id),
        profile: None,
    }
}

pub fn profile(seed: i64) -> HeroProfile {
    HeroProfile {
        str: seed,
        int: seed + 1,
        agi: seed + 2,
        luk: seed + 3,
    }
}

/// Backend whose every call fails.
pub struct FailingBackend;

#[async_trait]
impl CacheBackend for FailingBackend {
    async fn get(&self, _key: &str) -> std::result::Result<Option<String>, BackendError> {
        Err(BackendError::Unavailable("connection refused".to_string()))
    }

    async fn set(
        &self,
        _key: &str,
        _value: String,
        _ttl_secs: u64,
    ) -> std::result::Result<(), BackendError> {
        Err(BackendError::Unavailable("connection refused".to_string()))
    }
}

/// Backend remembering every write, including its TTL.
#[derive(Default)]
pub struct RecordingBackend {
    writes: Mutex<HashMap<String, (String, u64)>>,
}

impl RecordingBackend {
    pub fn last_ttl(&self, key: &str) -> Option<u64> {
        self.writes.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.writes.lock().unwrap().get(key).map(|(v, _)| v.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.writes.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl CacheBackend for RecordingBackend {
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, BackendError> {
        Ok(self.value(key))
    }

    async fn set(
        &self,
        key: &str,
        value: String,
        ttl_secs: u64,
    ) -> std::result::Result<(), BackendError> {
        self.writes
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, ttl_secs));
        Ok(())
    }
}

/// Scripted upstream with per-operation call counters.
#[derive(Default)]
pub struct FakeHeroApi {
    heroes: Vec<Hero>,
    list_error: Option<HeroError>,
    profile_errors: HashMap<String, HeroError>,
    accepted: Option<(String, String)>,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    pub auth_calls: AtomicUsize,
}

impl FakeHeroApi {
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes,
            ..Self::default()
        }
    }

    pub fn failing_list(mut self, err: HeroError) -> Self {
        self.list_error = Some(err);
        self
    }

    pub fn failing_profile(mut self, id: &str, err: HeroError) -> Self {
        self.profile_errors.insert(id.to_string(), err);
        self
    }

    pub fn accepting(mut self, username: &str, password: &str) -> Self {
        self.accepted = Some((username.to_string(), password.to_string()));
        self
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    /// Profiles are derived from the numeric id.
    pub fn profile_for(id: &str) -> HeroProfile {
        profile(id.parse().unwrap_or(0))
    }
}

#[async_trait]
impl HeroApi for FakeHeroApi {
    async fn list_heroes(&self) -> Result<Vec<Hero>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.list_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.heroes.clone()),
        }
    }

    async fn get_hero(&self, id: &str) -> Result<Hero> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.heroes
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| HeroError::NotFound(format!("Hero with id {} not found", id)))
    }

    async fn get_hero_profile(&self, id: &str) -> Result<HeroProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.profile_errors.get(id) {
            return Err(err.clone());
        }
        if self.heroes.iter().any(|h| h.id == id) {
            Ok(Self::profile_for(id))
        } else {
            Err(HeroError::NotFound(format!("Hero with id {} not found", id)))
        }
    }

    async fn authenticate(&self, username: &str, password: &str) -> bool {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        self.accepted
            .as_ref()
            .is_some_and(|(u, p)| u == username && p == password)
    }
}
