//! Heroes Module
//!
//! Cache-aside repository over the upstream client, and the thin service
//! choosing enriched or plain reads by authentication.

mod repository;
mod service;

pub use repository::{
    credential_key, hero_key, hero_with_profile_key, CachedHeroRepository, HeroRepository, HEROES_KEY,
    HEROES_WITH_PROFILE_KEY,
};
pub use service::HeroService;
