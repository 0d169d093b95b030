//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod health;
pub mod state;

pub use self::state::AppState;

use actix_web::{Scope, web};

/// Mount the versioned API routes.
pub fn api_scope() -> Scope {
    web::scope("/api/v1").service(auth::login)
}
