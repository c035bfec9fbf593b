//! Driven port for one-way password hashing.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Producing a hash failed.
        Hashing { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Salted one-way hash over plaintext passwords.
///
/// Implementations are CPU-bound and synchronous; callers move them off the
/// async executor.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh random salt.
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Return whether `plaintext` matches `hash`.
    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}
