//! Hero Service
//!
//! Picks the enriched repository reads for authenticated callers.

use std::sync::Arc;

use crate::error::Result;
use crate::heroes::HeroRepository;
use crate::models::Hero;

#[derive(Clone)]
pub struct HeroService {
    repo: Arc<dyn HeroRepository>,
}

impl HeroService {
    pub fn new(repo: Arc<dyn HeroRepository>) -> Self {
        Self { repo }
    }

    /// All heroes, with profiles if `is_authenticated`.
    pub async fn find_all(&self, is_authenticated: bool) -> Result<Vec<Hero>> {
        if is_authenticated {
            self.repo.get_all_heroes_with_profile().await
        } else {
            self.repo.get_all_heroes().await
        }
    }

    /// A single hero, with its profile if `is_authenticated`.
    pub async fn find_by_id(&self, id: &str, is_authenticated: bool) -> Result<Hero> {
        if is_authenticated {
            self.repo.get_hero_with_profile_by_id(id).await
        } else {
            self.repo.get_hero_by_id(id).await
        }
    }
}
