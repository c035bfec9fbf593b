//! Driving ports for the credential flow: signup, login and profile reads.
//!
//! Inbound adapters call these without knowing how records are stored or
//! passwords hashed, which keeps handler tests free of I/O.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SignupCandidate, UserId, UserProfile};

/// Use-case port for registering new users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Validate and store a candidate, returning the new user's id.
    ///
    /// Fails with `InvalidRequest` (field errors in `details`) or `Conflict`
    /// when the email is taken.
    async fn register(&self, candidate: SignupCandidate) -> Result<UserId, Error>;
}

/// Use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check credentials and return the matching profile.
    ///
    /// Unknown email and wrong password fail identically with `Unauthorized`.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error>;
}

/// Use-case port for reading a profile by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the profile, or `NotFound`.
    async fn fetch_profile(&self, user_id: &UserId) -> Result<UserProfile, Error>;
}
