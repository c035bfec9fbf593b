//! Domain primitives, validation and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! outbound adapters, plus the services that implement the driving ports.
//! Keep types immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User and UserProfile: stored record and its redacted public view.
//! - SignupCandidate and `validate_signup`: structured signup validation.
//! - LoginCredentials: validated login input.
//! - CommitSummaryRequest and SummaryPrompt: commit-summary pipeline types.
//! - CredentialService and CommitSummaryService: port implementations.

pub mod auth;
pub mod commit_summary;
pub mod commit_summary_service;
pub mod credential_service;
pub mod error;
pub mod ports;
pub mod signup;
pub mod trace_id;
pub mod user;

pub use self::auth::{INVALID_CREDENTIALS_MESSAGE, LoginCredentials, LoginValidationError};
pub use self::commit_summary::{
    CommitMessage, CommitSummaryRequest, CommitSummaryValidationError, ConversationTurn,
    RepositoryRef, SummaryModel, SummaryPrompt, TurnRole,
};
pub use self::commit_summary_service::CommitSummaryService;
pub use self::credential_service::CredentialService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::signup::{
    FieldError, FieldErrorCode, PASSWORD_MIN_CHARS, SignupCandidate, SignupValidationError,
    ValidatedSignup, validate_signup,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    CONTACT_DIGITS, ContactNumber, EmailAddress, PasswordHash, RequiredText, User, UserDraft,
    UserId, UserProfile, UserValidationError,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use loginapp::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
