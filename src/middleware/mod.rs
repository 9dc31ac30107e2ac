//! Middleware HTTP

pub mod auth;
pub mod cors;

pub use auth::{auth_middleware, require_admin, AuthenticatedUser};
pub use cors::cors_layer;
