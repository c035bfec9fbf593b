//! Commit-summary domain service.
//!
//! Fetches a repository's commit messages, turns each into one user turn and
//! relays the first completion from the summary generator. Neither call is
//! retried and nothing is cached.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    CommitSource, CommitSourceError, CommitSummarizer, SummaryGenerator, SummaryGeneratorError,
};
use crate::domain::{CommitSummaryRequest, Error, SummaryPrompt};

/// Service implementing [`CommitSummarizer`].
#[derive(Clone)]
pub struct CommitSummaryService<C, G> {
    commits: Arc<C>,
    generator: Arc<G>,
}

impl<C, G> CommitSummaryService<C, G> {
    /// Create a service over a commit source and a summary generator.
    pub fn new(commits: Arc<C>, generator: Arc<G>) -> Self {
        Self { commits, generator }
    }
}

fn map_source_error(error: CommitSourceError) -> Error {
    warn!(%error, "commit listing failed");
    match error {
        CommitSourceError::RepositoryNotFound { .. } => Error::not_found("Repository not found"),
        other => Error::upstream(other.to_string()),
    }
}

fn map_generator_error(error: SummaryGeneratorError) -> Error {
    warn!(%error, "summary generation failed");
    Error::upstream(error.to_string())
}

#[async_trait]
impl<C, G> CommitSummarizer for CommitSummaryService<C, G>
where
    C: CommitSource,
    G: SummaryGenerator,
{
    async fn summarize(&self, request: &CommitSummaryRequest) -> Result<String, Error> {
        let commits = self
            .commits
            .list_commits(request.repository())
            .await
            .map_err(map_source_error)?;
        debug!(
            repository = %request.repository(),
            model = %request.model(),
            commits = commits.len(),
            "fetched commits for summary"
        );

        let prompt = SummaryPrompt::from_commits(request.model(), commits);
        self.generator
            .summarize(&prompt)
            .await
            .map_err(map_generator_error)
    }
}
