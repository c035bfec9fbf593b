//! Driving port for the commit-summary use case.

use async_trait::async_trait;

use crate::domain::{CommitSummaryRequest, Error};

/// Summarises a repository's commit history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitSummarizer: Send + Sync {
    /// Fetch commits and return the generated summary text.
    ///
    /// Fails with `NotFound` for unknown repositories and `UpstreamFailure`
    /// for any other fetch or completion failure.
    async fn summarize(&self, request: &CommitSummaryRequest) -> Result<String, Error>;
}
