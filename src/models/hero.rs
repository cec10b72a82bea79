//! Hero domain values

use serde::{Deserialize, Serialize};

/// A hero record, optionally enriched with its attribute profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Attached as a whole when enrichment succeeds, never partially
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<HeroProfile>,
}

impl Hero {
    /// Returns the hero with `profile` attached.
    pub fn with_profile(self, profile: HeroProfile) -> Self {
        Self {
            profile: Some(profile),
            ..self
        }
    }
}

/// Per-hero attribute profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroProfile {
    pub str: i64,
    pub int: i64,
    pub agi: i64,
    pub luk: i64,
}

/// Outcome of a credential check. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub is_authenticated: bool,
}

impl AuthResult {
    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
        }
    }
}
