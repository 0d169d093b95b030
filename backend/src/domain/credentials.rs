//! Validated login credentials.
//!
//! Inbound payloads are parsed into this type before the operation talks to
//! any port, so lookups and hash comparisons only ever see normalised input.

use std::fmt;

use zeroize::Zeroizing;

/// Validation failures for raw login input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username blank once trimmed.
    EmptyUsername,
    /// Password blank once trimmed.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Login credentials after structural validation.
///
/// ## Invariants
/// - Both fields are trimmed of surrounding whitespace and non-empty
///   afterwards. Trimming the password matches the original intake schema,
///   which normalised both fields the same way.
/// - The password buffer is zeroised on drop.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("  ada  ", " secret ").expect("valid input");
/// assert_eq!(creds.username(), "ada");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw username/password input, aborting on the first issue.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        let password = password.trim();
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username suitable for repository lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Normalised password submitted by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
