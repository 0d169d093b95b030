//! Server configuration sourced from the environment.

use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SEED_USERNAME: &str = "admin";
const DEFAULT_SEED_PASSWORD: &str = "password";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `BIND_ADDR` did not parse as a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        /// The offending value.
        value: String,
        /// Parser diagnostic.
        source: std::net::AddrParseError,
    },
}

/// Application configuration resolved at startup.
///
/// The seed account keeps development parity with the original fixture
/// (`admin`/`password`): the composition root hashes the seed password and
/// inserts one live account so the service is usable out of the box.
#[derive(Debug, Clone)]
pub struct AppConfig {
    bind_addr: SocketAddr,
    seed_username: String,
    seed_password: String,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            seed_username: lookup("SEED_USERNAME")
                .unwrap_or_else(|| DEFAULT_SEED_USERNAME.to_owned()),
            seed_password: lookup("SEED_PASSWORD")
                .unwrap_or_else(|| DEFAULT_SEED_PASSWORD.to_owned()),
        })
    }

    /// Socket address the server binds to.
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Username of the seeded development account.
    pub fn seed_username(&self) -> &str {
        self.seed_username.as_str()
    }

    /// Password of the seeded development account.
    pub fn seed_password(&self) -> &str {
        self.seed_password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).expect("defaults parse");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.seed_username(), "admin");
        assert_eq!(config.seed_password(), "password");
    }

    #[rstest]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "BIND_ADDR" => Some("127.0.0.1:9000".to_owned()),
            "SEED_USERNAME" => Some("hieu".to_owned()),
            "SEED_PASSWORD" => Some("s3cret".to_owned()),
            _ => None,
        })
        .expect("explicit values parse");
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.seed_username(), "hieu");
        assert_eq!(config.seed_password(), "s3cret");
    }

    #[rstest]
    #[case("not-an-addr")]
    #[case("127.0.0.1")]
    #[case(":8080")]
    fn malformed_bind_addr_is_reported(#[case] value: &str) {
        let err = AppConfig::from_lookup(|key| {
            (key == "BIND_ADDR").then(|| value.to_owned())
        })
        .expect_err("malformed address fails");
        assert!(err.to_string().contains("invalid bind address"));
    }
}
