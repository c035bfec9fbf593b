//! Credential domain service: signup, login and profile reads.
//!
//! Passwords are hashed exactly once, on registration, before the record is
//! handed to the repository. Every user leaving this service is converted to
//! a [`UserProfile`], so the stored hash never crosses the boundary.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    LoginService, PasswordHashError, PasswordHasher, SignupService, UserPersistenceError,
    UserProfileQuery, UserRepository,
};
use crate::domain::{
    Error, INVALID_CREDENTIALS_MESSAGE, LoginCredentials, PasswordHash, SignupCandidate,
    SignupValidationError, User, UserDraft, UserId, UserProfile, ValidatedSignup,
    validate_signup,
};

/// Credential service implementing the signup, login and profile ports.
#[derive(Clone)]
pub struct CredentialService<R, H> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> CredentialService<R, H> {
    /// Create a new service over a record store and a password hasher.
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }
}

fn map_repository_error(error: UserPersistenceError) -> Error {
    if !matches!(error, UserPersistenceError::DuplicateEmail) {
        warn!(%error, "user repository call failed");
    }
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        duplicate @ UserPersistenceError::DuplicateEmail => Error::conflict(duplicate.to_string()),
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    error!(%error, "password hashing failed");
    Error::internal(error.to_string())
}

fn map_validation_error(error: SignupValidationError) -> Error {
    let message = error.to_string();
    Error::invalid_request(message).with_details(json!({
        "code": "validation_failed",
        "fieldErrors": error.errors,
    }))
}

fn invalid_credentials() -> Error {
    Error::unauthorized(INVALID_CREDENTIALS_MESSAGE)
}

impl<R, H> CredentialService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn hash_password(&self, password: Zeroizing<String>) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(map_hash_error)
    }

    async fn verify_password(&self, password: &str, hash: &PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.clone();
        tokio::task::spawn_blocking(move || hasher.verify(password.as_str(), &hash))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))?
            .map_err(map_hash_error)
    }
}

#[async_trait]
impl<R, H> SignupService for CredentialService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn register(&self, candidate: SignupCandidate) -> Result<UserId, Error> {
        let ValidatedSignup {
            name,
            email,
            password,
            age,
            city,
            contact,
        } = validate_signup(candidate).map_err(map_validation_error)?;

        let password_hash = self.hash_password(password).await?;
        let user = User::new(UserDraft {
            id: UserId::random(),
            name,
            email,
            password_hash,
            age,
            city,
            contact,
        });

        self.repository
            .insert(&user)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user.id().clone())
    }
}

#[async_trait]
impl<R, H> LoginService for CredentialService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error> {
        let Some(user) = self
            .repository
            .find_by_email(credentials.email())
            .await
            .map_err(map_repository_error)?
        else {
            debug!("login rejected: unknown email");
            return Err(invalid_credentials());
        };

        if !self
            .verify_password(credentials.password(), user.password_hash())
            .await?
        {
            debug!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(invalid_credentials());
        }

        Ok(user.to_profile())
    }
}

#[async_trait]
impl<R, H> UserProfileQuery for CredentialService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn fetch_profile(&self, user_id: &UserId) -> Result<UserProfile, Error> {
        self.repository
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .map(UserProfile::from)
            .ok_or_else(|| Error::not_found("User not found"))
    }
}

#[cfg(test)]
#[path = "credential_service_tests.rs"]
mod tests;
