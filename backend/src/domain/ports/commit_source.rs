//! Driven port for reading commit history from a source-control host.

use async_trait::async_trait;

use crate::domain::{CommitMessage, RepositoryRef};

use super::define_port_error;

define_port_error! {
    /// Errors raised by commit source adapters.
    pub enum CommitSourceError {
        /// The host reports no such repository.
        RepositoryNotFound { repository: String } => "repository {repository} was not found",
        /// The host answered with a non-success status.
        Status { status: u16, message: String } => "commit source returned status {status}: {message}",
        /// The request could not be delivered or the connection failed.
        Transport { message: String } => "commit source transport failed: {message}",
        /// The request did not complete within the configured timeout.
        Timeout { message: String } => "commit source timed out: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "commit source response was malformed: {message}",
    }
}

/// Lists commit messages for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Return commit messages in the order the host lists them.
    async fn list_commits(
        &self,
        repository: &RepositoryRef,
    ) -> Result<Vec<CommitMessage>, CommitSourceError>;
}
