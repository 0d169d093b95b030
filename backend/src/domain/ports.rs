//! Domain ports for the driven collaborators.
//!
//! Ports describe how the domain expects to interact with infrastructure
//! (the account store, the credential hashing scheme). Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants instead of leaking backend-specific error types.

use async_trait::async_trait;
use thiserror::Error;

use super::Account;

/// Errors surfaced by account repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountPersistenceError {
    /// Store connectivity failures.
    #[error("account repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied diagnostic.
        message: String,
    },
    /// Query execution failures.
    #[error("account repository query failed: {message}")]
    Query {
        /// Adapter-supplied diagnostic.
        message: String,
    },
}

impl AccountPersistenceError {
    /// Helper for connection-oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for account lookups.
///
/// `Ok(None)` means "treat as not found": adapters that swallow internal
/// faults and log them locally surface those as `None` as well, so the
/// operation cannot distinguish a missing account from a degraded store.
/// `Err` is the path for faults the adapter wants the operation to classify
/// as unexpected.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch an account by its unique username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountPersistenceError>;
}

/// Credential hashing capability.
///
/// The algorithm is a deployment decision made behind this port; the login
/// operation only ever sees the two-method surface.
pub trait PasswordHasher: Send + Sync {
    /// Produce the encoded digest for a plain-text password.
    fn hash(&self, plain: &str) -> String;

    /// Compare a plain-text password against an encoded digest.
    ///
    /// Malformed digests compare unequal rather than erroring, so a
    /// corrupted stored credential behaves like a wrong password.
    fn verify(&self, plain: &str, encoded: &str) -> bool;
}
