//! Reqwest-backed GitHub commit source.
//!
//! This adapter owns transport details only: URL construction, auth headers,
//! timeout and HTTP error mapping, and JSON decoding into commit messages.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use zeroize::Zeroizing;

use super::dto::CommitEntryDto;
use crate::domain::ports::{CommitSource, CommitSourceError};
use crate::domain::{CommitMessage, RepositoryRef};
use crate::outbound::http_support::{body_preview, with_trailing_slash};

const DEFAULT_USER_AGENT: &str = "loginapp-backend/0.1";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Commit source that lists `GET {base}/repos/{owner}/{repo}/commits`.
pub struct GithubCommitSource {
    client: Client,
    base_url: Url,
    token: Option<Zeroizing<String>>,
}

impl GithubCommitSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// Requests are anonymous unless `token` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        token: Option<Zeroizing<String>>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
            token,
        })
    }

    fn commits_url(&self, repository: &RepositoryRef) -> Result<Url, CommitSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CommitSourceError::transport("GitHub base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["repos", repository.owner(), repository.repo(), "commits"]);
        Ok(url)
    }
}

#[async_trait]
impl CommitSource for GithubCommitSource {
    async fn list_commits(
        &self,
        repository: &RepositoryRef,
    ) -> Result<Vec<CommitMessage>, CommitSourceError> {
        let mut request = self
            .client
            .get(self.commits_url(repository)?)
            .header(reqwest::header::ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status == StatusCode::NOT_FOUND {
            return Err(CommitSourceError::repository_not_found(
                repository.to_string(),
            ));
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_commits(body.as_ref())
    }
}

fn parse_commits(body: &[u8]) -> Result<Vec<CommitMessage>, CommitSourceError> {
    let entries: Vec<CommitEntryDto> = serde_json::from_slice(body).map_err(|error| {
        CommitSourceError::decode(format!("invalid GitHub commits payload: {error}"))
    })?;
    Ok(entries.into_iter().map(CommitMessage::from).collect())
}

fn map_transport_error(error: reqwest::Error) -> CommitSourceError {
    if error.is_timeout() {
        CommitSourceError::timeout(error.to_string())
    } else {
        CommitSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CommitSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        preview
    };
    CommitSourceError::status(status.as_u16(), message)
}
