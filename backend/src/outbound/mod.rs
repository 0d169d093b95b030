//! Driven adapters implementing the domain ports.
//!
//! Adapters are thin translators between domain types and infrastructure
//! concerns; they contain no business logic. The crate ships reference
//! adapters only — the real persistence layer is an external collaborator
//! reached through the same ports.

pub mod hashing;
pub mod memory;

pub use self::hashing::Sha256PasswordHasher;
pub use self::memory::InMemoryAccountRepository;
