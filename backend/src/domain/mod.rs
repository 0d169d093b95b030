//! Domain types, ports, and the login operation.
//!
//! Everything here is transport agnostic: inbound adapters decode payloads
//! into these types and relay the envelopes they produce; outbound adapters
//! implement the ports. Invariants live in each type's Rustdoc.

pub mod account;
pub mod credentials;
pub mod login;
pub mod ports;

pub use self::account::Account;
pub use self::credentials::{LoginCredentials, LoginValidationError};
pub use self::login::{LoginInput, LoginOperation, LoginOutput};
