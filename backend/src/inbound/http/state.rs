//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data` so they depend
//! only on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountRepository, PasswordHasher};
use crate::pipeline::LifecycleLog;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account lookup port.
    pub accounts: Arc<dyn AccountRepository>,
    /// Credential hashing port.
    pub hasher: Arc<dyn PasswordHasher>,
    /// Lifecycle log injected into pipelines and operations.
    pub lifecycle: Arc<dyn LifecycleLog>,
}

impl AppState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        lifecycle: Arc<dyn LifecycleLog>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            lifecycle,
        }
    }
}
