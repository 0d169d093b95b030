//! Inbound adapters translating external requests into domain calls while
//! keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`]; future inbound transports are
//! expected to sit alongside it.

pub mod http;
