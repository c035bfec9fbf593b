//! Signup candidate validation.
//!
//! Validation is a plain function over raw inputs and does not touch the
//! record store. It reports every failing field at once so clients can show
//! all problems in a single round trip.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroizing;

use super::user::{ContactNumber, EmailAddress, RequiredText, UserValidationError};

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Largest accepted age.
pub const AGE_MAX: u32 = 150;

/// Raw signup input as received from a client. Every field may be missing.
#[derive(Default)]
pub struct SignupCandidate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Zeroizing<String>>,
    /// Age as text; numeric JSON values are rendered to text by the adapter.
    pub age: Option<String>,
    pub city: Option<String>,
    pub contact: Option<String>,
}

/// Machine-readable reason for a field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    Missing,
    InvalidFormat,
    TooShort,
    OutOfRange,
}

/// One failing signup field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub code: FieldErrorCode,
    pub message: String,
}

impl FieldError {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            code: FieldErrorCode::Missing,
            message: format!("{field} is required"),
        }
    }

    fn new(field: &'static str, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

/// All field failures for one candidate, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", summary(.errors))]
pub struct SignupValidationError {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Signup input that passed validation; the password is still plaintext and
/// must be hashed before anything is stored.
pub struct ValidatedSignup {
    pub name: RequiredText,
    pub email: EmailAddress,
    pub password: Zeroizing<String>,
    pub age: u32,
    pub city: RequiredText,
    pub contact: ContactNumber,
}

impl fmt::Debug for ValidatedSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedSignup")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("age", &self.age)
            .field("city", &self.city)
            .field("contact", &self.contact)
            .finish()
    }
}

/// Validate a candidate, collecting every field error.
///
/// # Examples
/// ```
/// use loginapp::domain::{validate_signup, SignupCandidate};
/// use zeroize::Zeroizing;
///
/// let candidate = SignupCandidate {
///     name: Some("Ada".into()),
///     email: Some("ada@example.com".into()),
///     password: Some(Zeroizing::new("secret1".into())),
///     age: Some("36".into()),
///     city: Some("London".into()),
///     contact: Some("0123456789".into()),
/// };
/// assert!(validate_signup(candidate).is_ok());
/// ```
pub fn validate_signup(candidate: SignupCandidate) -> Result<ValidatedSignup, SignupValidationError> {
    let SignupCandidate {
        name,
        email,
        password,
        age,
        city,
        contact,
    } = candidate;
    let mut errors = Vec::new();

    let name = required_text("name", name, &mut errors);
    let email = match present(email) {
        None => record(&mut errors, FieldError::missing("email")),
        Some(raw) => EmailAddress::new(raw).map_or_else(
            |_| {
                record(
                    &mut errors,
                    FieldError::new("email", FieldErrorCode::InvalidFormat, "Email is invalid"),
                )
            },
            Some,
        ),
    };
    let password = match password.filter(|value| !value.is_empty()) {
        None => record(&mut errors, FieldError::missing("password")),
        Some(value) if value.chars().count() < PASSWORD_MIN_CHARS => record(
            &mut errors,
            FieldError::new(
                "password",
                FieldErrorCode::TooShort,
                format!("password must be at least {PASSWORD_MIN_CHARS} characters"),
            ),
        ),
        Some(value) => Some(value),
    };
    let age = match present(age) {
        None => record(&mut errors, FieldError::missing("age")),
        Some(raw) => parse_age(raw.trim()).map_or_else(|error| record(&mut errors, error), Some),
    };
    let city = required_text("city", city, &mut errors);
    let contact = match present(contact) {
        None => record(&mut errors, FieldError::missing("contact")),
        Some(raw) => ContactNumber::new(raw.trim()).map_or_else(
            |_| {
                record(
                    &mut errors,
                    FieldError::new(
                        "contact",
                        FieldErrorCode::InvalidFormat,
                        UserValidationError::InvalidContact.to_string(),
                    ),
                )
            },
            Some,
        ),
    };

    match (name, email, password, age, city, contact) {
        (Some(name), Some(email), Some(password), Some(age), Some(city), Some(contact))
            if errors.is_empty() =>
        {
            Ok(ValidatedSignup {
                name,
                email,
                password,
                age,
                city,
                contact,
            })
        }
        _ => Err(SignupValidationError { errors }),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn record<T>(errors: &mut Vec<FieldError>, error: FieldError) -> Option<T> {
    errors.push(error);
    None
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<RequiredText> {
    match present(value).map(RequiredText::new) {
        Some(Ok(text)) => Some(text),
        _ => record(errors, FieldError::missing(field)),
    }
}

fn parse_age(raw: &str) -> Result<u32, FieldError> {
    let out_of_range = || {
        FieldError::new(
            "age",
            FieldErrorCode::OutOfRange,
            format!("age must be between 0 and {AGE_MAX}"),
        )
    };
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::new(
            "age",
            FieldErrorCode::InvalidFormat,
            "age must be a whole number",
        ));
    }
    if raw.starts_with('-') && digits.bytes().any(|b| b != b'0') {
        return Err(out_of_range());
    }
    match digits.parse::<u32>() {
        Ok(age) if age <= AGE_MAX => Ok(age),
        _ => Err(out_of_range()),
    }
}
