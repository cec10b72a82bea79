//! API Module
//!
//! HTTP handlers and routing for the hero gateway.
//!
//! # Endpoints
//! - `GET /heroes` - List heroes (with profiles when authenticated)
//! - `GET /heroes/:hero_id` - Single hero (with profile when authenticated)
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint
//!
//! Any other path or method answers 404 with code 40400.

pub mod handlers;
mod request_id;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
