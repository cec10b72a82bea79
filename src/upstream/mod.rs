//! Upstream Module
//!
//! Validated, error-mapped access to the upstream hero REST API.
//!
//! # Endpoints consumed
//! - `GET /heroes` - List heroes
//! - `GET /heroes/{id}` - Single hero
//! - `GET /heroes/{id}/profile` - Hero attribute profile
//! - `POST /auth` - Credential check

mod client;
pub mod validator;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Hero, HeroProfile};

pub use client::UpstreamHeroClient;

// == Hero Api ==
/// Operations the data access layer needs from the upstream API.
#[async_trait]
pub trait HeroApi: Send + Sync {
    /// Lists every hero. Any malformed element fails the whole call.
    async fn list_heroes(&self) -> Result<Vec<Hero>>;

    /// Fetches a single hero.
    async fn get_hero(&self, id: &str) -> Result<Hero>;

    /// Fetches a hero's attribute profile.
    async fn get_hero_profile(&self, id: &str) -> Result<HeroProfile>;

    /// Checks credentials. Never fails: any error reads as `false`.
    async fn authenticate(&self, username: &str, password: &str) -> bool;
}
