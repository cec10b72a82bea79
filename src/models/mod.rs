//! Domain values and DTOs
//!
//! Hero records as served by the upstream API plus the request/response
//! bodies of the HTTP adapter.

pub mod hero;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use hero::{AuthResult, Hero, HeroProfile};
pub use requests::Credentials;
pub use responses::{ErrorResponse, HeroesResponse, StatsResponse};
