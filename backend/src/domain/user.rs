//! User record and its value types.
//!
//! A [`User`] is what the record store holds. It always carries a
//! [`PasswordHash`], never a plaintext password. Anything that crosses the
//! service boundary is a [`UserProfile`], which has no password field at all.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors raised by the user value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must not be empty")]
    EmptyId,
    #[error("user id must be a valid UUID")]
    InvalidId,
    #[error("value must not be empty")]
    EmptyText,
    #[error("email is invalid")]
    InvalidEmail,
    #[error("contact must be a 10-digit number")]
    InvalidContact,
    #[error("password hash must not be empty")]
    EmptyPasswordHash,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from text.
    ///
    /// # Examples
    /// ```
    /// use loginapp::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("42").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random identifier for a freshly registered user.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-blank free text such as a name or a city, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequiredText(String);

impl RequiredText {
    /// Trim and validate `value`.
    pub fn new(value: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyText);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<RequiredText> for String {
    fn from(value: RequiredText) -> Self {
        value.0
    }
}

impl TryFrom<String> for RequiredText {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^\S+@\S+\.\S+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address used as the unique login key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim and validate `value` against `something@something.something`.
    ///
    /// # Examples
    /// ```
    /// use loginapp::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new(" ada@example.com ").is_ok());
    /// assert!(EmailAddress::new("ada@example").is_err());
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyText);
        }
        if !email_regex().is_match(trimmed) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of digits in a contact number.
pub const CONTACT_DIGITS: usize = 10;

/// Contact phone number made of exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Validate `value`; surrounding whitespace is not tolerated.
    pub fn new(value: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = value.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyText);
        }
        if raw.len() != CONTACT_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserValidationError::InvalidContact);
        }
        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for ContactNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ContactNumber> for String {
    fn from(value: ContactNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for ContactNumber {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Salted one-way hash of a password, in PHC string format.
///
/// `Debug` never prints the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a [`PasswordHasher`] or read from storage.
    ///
    /// [`PasswordHasher`]: crate::domain::ports::PasswordHasher
    pub fn new(encoded: impl Into<String>) -> Result<Self, UserValidationError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self(encoded))
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `password_hash` is always a hash; there is no way to build a `User`
///   from a plaintext password.
/// - `email` is unique within the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: RequiredText,
    email: EmailAddress,
    password_hash: PasswordHash,
    age: u32,
    city: RequiredText,
    contact: ContactNumber,
}

/// Parameter object for [`User::new`].
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: UserId,
    pub name: RequiredText,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub age: u32,
    pub city: RequiredText,
    pub contact: ContactNumber,
}

impl User {
    /// Build a user from validated components.
    pub fn new(draft: UserDraft) -> Self {
        let UserDraft {
            id,
            name,
            email,
            password_hash,
            age,
            city,
            contact,
        } = draft;
        Self {
            id,
            name,
            email,
            password_hash,
            age,
            city,
            contact,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &RequiredText {
        &self.name
    }

    /// Unique login email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Age in whole years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Home city.
    pub fn city(&self) -> &RequiredText {
        &self.city
    }

    /// Ten-digit contact number.
    pub fn contact(&self) -> &ContactNumber {
        &self.contact
    }

    /// Public view of the record with the password hash removed.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.to_string(),
            name: self.name.as_ref().to_owned(),
            email: self.email.as_ref().to_owned(),
            age: self.age,
            city: self.city.as_ref().to_owned(),
            contact: self.contact.as_ref().to_owned(),
        }
    }
}

/// User record as returned across the service boundary; it has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = 36)]
    pub age: u32,
    #[schema(example = "London")]
    pub city: String,
    #[schema(example = "0123456789")]
    pub contact: String,
}

impl From<User> for UserProfile {
    fn from(value: User) -> Self {
        value.to_profile()
    }
}
