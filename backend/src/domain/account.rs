//! Account snapshot as seen by authentication.

use uuid::Uuid;

/// Stored account record returned by the repository port.
///
/// Carries only the columns the login operation needs; the wider account
/// schema (profile, role, contact details) lives behind the persistence
/// collaborator and never crosses this boundary.
///
/// ## Invariants
/// - `password_hash` holds the encoded credential digest, never plain text.
/// - A record with `is_deleted` set authenticates exactly like a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: Uuid,
    username: String,
    password_hash: String,
    is_deleted: bool,
}

impl Account {
    /// Build a live account record.
    pub fn new(id: Uuid, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            is_deleted: false,
        }
    }

    /// Mark the record soft-deleted.
    pub fn soft_deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    /// Stable record identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Unique login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Encoded credential digest.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }

    /// Whether the record is soft-deleted.
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
