//! Auth Module
//!
//! Single-shot credential validation with a cached password-hash fast path.

pub mod password;
mod validator;

pub use validator::CredentialValidator;
