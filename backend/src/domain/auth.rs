//! Login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port.

use zeroize::Zeroizing;

/// Single message returned for every rejected login, whether the email is
/// unknown or the password is wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Domain error returned when login payload values are missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was missing or empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Login credentials used by the credential handler.
///
/// ## Invariants
/// - `email` is trimmed and non-empty. Its format is not checked; an
///   unknown or malformed email simply fails the lookup.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use loginapp::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada@example.com ", "secret1").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.password(), "secret1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the record lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password to compare against the stored hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
