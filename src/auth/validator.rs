//! Credential Validator
//!
//! 1. A cached hash for the username that verifies the password wins
//!    without calling upstream.
//! 2. Otherwise upstream decides; on success a fresh hash is cached with the
//!    default TTL.
//! 3. Anything else is unauthenticated and writes nothing.
//!
//! The hash cache only saves upstream calls; it never accepts credentials
//! upstream has not accepted before.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::cache::CacheService;
use crate::heroes::credential_key;
use crate::models::AuthResult;
use crate::upstream::HeroApi;

#[derive(Clone)]
pub struct CredentialValidator {
    cache: CacheService,
    api: Arc<dyn HeroApi>,
}

impl CredentialValidator {
    pub fn new(cache: CacheService, api: Arc<dyn HeroApi>) -> Self {
        Self { cache, api }
    }

    /// Validates a username/password pair. Never fails.
    pub async fn validate(&self, username: &str, password: &str) -> AuthResult {
        let key = credential_key(username);
        if let Some(hash) = self.cache.get(&key).await {
            if verify_blocking(password, hash).await {
                debug!(username = %username, "credentials matched cached hash");
                return AuthResult::authenticated();
            }
        }

        if !self.api.authenticate(username, password).await {
            return AuthResult::anonymous();
        }

        if let Some(hash) = hash_blocking(password).await {
            self.cache.set(&key, hash, None).await;
        }
        AuthResult::authenticated()
    }
}

// Argon2 is CPU-bound; keep it off the async workers

async fn verify_blocking(password: &str, hash: String) -> bool {
    let password = password.to_string();
    match tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await {
        Ok(Ok(matched)) => matched,
        Ok(Err(e)) => {
            warn!(error = %e, "ignoring malformed cached password hash");
            false
        }
        Err(e) => {
            warn!(error = %e, "password verification task failed");
            false
        }
    }
}

async fn hash_blocking(password: &str) -> Option<String> {
    let password = password.to_string();
    match tokio::task::spawn_blocking(move || hash_password(&password)).await {
        Ok(Ok(hash)) => Some(hash),
        Ok(Err(e)) => {
            warn!(error = %e, "failed to hash password, skipping credential cache");
            None
        }
        Err(e) => {
            warn!(error = %e, "password hashing task failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheBackend, MemoryBackend};
    use crate::heroes::HEROES_KEY;
    use crate::test_support::{FailingBackend, FakeHeroApi, RecordingBackend};

    fn validator_with(
        api: FakeHeroApi,
        backend: Arc<dyn CacheBackend>,
    ) -> (CredentialValidator, Arc<FakeHeroApi>) {
        let api = Arc::new(api);
        let validator = CredentialValidator::new(CacheService::new(backend), api.clone());
        (validator, api)
    }

    #[tokio::test]
    async fn test_cached_hash_skips_upstream() {
        let backend = Arc::new(MemoryBackend::new(10));
        backend
            .set(&credential_key("hahow"), hash_password("rocks").unwrap(), 60)
            .await
            .unwrap();
        let (validator, api) = validator_with(FakeHeroApi::default(), backend);

        let result = validator.validate("hahow", "rocks").await;

        assert!(result.is_authenticated);
        assert_eq!(FakeHeroApi::count(&api.auth_calls), 0);
    }

    #[tokio::test]
    async fn test_upstream_success_caches_hash() {
        let backend = Arc::new(RecordingBackend::default());
        let (validator, api) = validator_with(
            FakeHeroApi::default().accepting("hahow", "rocks"),
            backend.clone(),
        );

        let result = validator.validate("hahow", "rocks").await;

        assert!(result.is_authenticated);
        assert_eq!(FakeHeroApi::count(&api.auth_calls), 1);
        let hash = backend.value(&credential_key("hahow")).unwrap();
        assert!(verify_password("rocks", &hash).unwrap());
        assert!(!hash.contains("rocks"));
    }

    #[tokio::test]
    async fn test_second_validation_uses_fast_path() {
        let backend = Arc::new(MemoryBackend::new(10));
        let (validator, api) =
            validator_with(FakeHeroApi::default().accepting("hahow", "rocks"), backend);

        assert!(validator.validate("hahow", "rocks").await.is_authenticated);
        assert!(validator.validate("hahow", "rocks").await.is_authenticated);

        assert_eq!(FakeHeroApi::count(&api.auth_calls), 1);
    }

    #[tokio::test]
    async fn test_rejected_credentials_write_nothing() {
        let backend = Arc::new(RecordingBackend::default());
        let (validator, api) = validator_with(
            FakeHeroApi::default().accepting("hahow", "rocks"),
            backend.clone(),
        );

        let result = validator.validate("hahow", "wrong").await;

        assert!(!result.is_authenticated);
        assert_eq!(FakeHeroApi::count(&api.auth_calls), 1);
        assert!(!backend.contains(&credential_key("hahow")));
    }

    #[tokio::test]
    async fn test_wrong_password_against_cached_hash_asks_upstream() {
        let backend = Arc::new(MemoryBackend::new(10));
        backend
            .set(&credential_key("hahow"), hash_password("rocks").unwrap(), 60)
            .await
            .unwrap();
        let (validator, api) =
            validator_with(FakeHeroApi::default().accepting("hahow", "rocks"), backend);

        let result = validator.validate("hahow", "guess").await;

        assert!(!result.is_authenticated);
        assert_eq!(FakeHeroApi::count(&api.auth_calls), 1);
    }

    #[tokio::test]
    async fn test_malformed_cached_hash_falls_back_to_upstream() {
        let backend = Arc::new(MemoryBackend::new(10));
        backend
            .set(&credential_key("hahow"), "garbage".to_string(), 60)
            .await
            .unwrap();
        let (validator, api) =
            validator_with(FakeHeroApi::default().accepting("hahow", "rocks"), backend);

        assert!(validator.validate("hahow", "rocks").await.is_authenticated);
        assert_eq!(FakeHeroApi::count(&api.auth_calls), 1);
    }

    #[tokio::test]
    async fn test_broken_cache_still_authenticates_upstream() {
        let (validator, api) = validator_with(
            FakeHeroApi::default().accepting("hahow", "rocks"),
            Arc::new(FailingBackend),
        );

        assert!(validator.validate("hahow", "rocks").await.is_authenticated);
        assert!(!validator.validate("hahow", "nope").await.is_authenticated);
        assert_eq!(FakeHeroApi::count(&api.auth_calls), 2);
    }

    #[tokio::test]
    async fn test_username_matching_hero_key_leaves_hero_cache_alone() {
        let backend = Arc::new(MemoryBackend::new(10));
        let heroes = r#"[{"id":"1","name":"Daredevil","image":"http://hahow.com/image1.jpg"}]"#;
        backend
            .set(HEROES_KEY, heroes.to_string(), 60)
            .await
            .unwrap();
        let (validator, _api) = validator_with(
            FakeHeroApi::default().accepting(HEROES_KEY, "pw"),
            backend.clone(),
        );

        assert!(validator.validate(HEROES_KEY, "pw").await.is_authenticated);

        assert_eq!(
            backend.get(HEROES_KEY).await.unwrap().as_deref(),
            Some(heroes)
        );
        let hash = backend.get(&credential_key(HEROES_KEY)).await.unwrap().unwrap();
        assert!(verify_password("pw", &hash).unwrap());
    }
}
