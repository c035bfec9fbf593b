//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`SignupService`, `LoginService`, `UserProfileQuery`,
//! `CommitSummarizer`) are what inbound adapters call. Driven ports
//! (`UserRepository`, `PasswordHasher`, `CommitSource`, `SummaryGenerator`)
//! are what the domain services call out through.

mod macros;
pub(crate) use macros::define_port_error;

mod commit_source;
mod commit_summarizer;
mod login_service;
mod password_hasher;
mod summary_generator;
mod user_repository;

#[cfg(test)]
pub use commit_source::MockCommitSource;
pub use commit_source::{CommitSource, CommitSourceError};
#[cfg(test)]
pub use commit_summarizer::MockCommitSummarizer;
pub use commit_summarizer::CommitSummarizer;
#[cfg(test)]
pub use login_service::{MockLoginService, MockSignupService, MockUserProfileQuery};
pub use login_service::{LoginService, SignupService, UserProfileQuery};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use summary_generator::MockSummaryGenerator;
pub use summary_generator::{SummaryGenerator, SummaryGeneratorError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
