//! Request-side inputs for the HTTP adapter
//!
//! Credentials arrive as request headers; hero ids arrive as path segments.

use std::sync::LazyLock;

use axum::http::HeaderMap;
use regex::Regex;

/// Header carrying the username.
pub const USERNAME_HEADER: &str = "Username";
/// Header carrying the password.
pub const PASSWORD_HEADER: &str = "Password";

static HERO_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("hero id pattern is valid"));

/// Username/password pair presented by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Reads credentials from request headers.
    ///
    /// Returns None unless both headers are present and valid UTF-8; such
    /// callers are treated as anonymous.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let username = headers.get(USERNAME_HEADER)?.to_str().ok()?;
        let password = headers.get(PASSWORD_HEADER)?.to_str().ok()?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Validates a hero id path segment.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_hero_id(id: &str) -> Option<String> {
    if HERO_ID_REGEX.is_match(id) {
        None
    } else {
        Some(format!("Invalid hero id '{}', expected an integer", id))
    }
}
