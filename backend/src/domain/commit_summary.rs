//! Commit-summary request types.
//!
//! A summary request names a repository and a model. The summarizer turns
//! the repository's commit messages into one conversational turn each and
//! forwards them, in upstream order, to the selected model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Language model used to produce the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SummaryModel {
    #[default]
    #[serde(rename = "grok-2-1212")]
    Grok2,
    #[serde(rename = "grok-2-vision-1212")]
    Grok2Vision,
    #[serde(rename = "grok-beta")]
    GrokBeta,
    #[serde(rename = "grok-vision-beta")]
    GrokVisionBeta,
}

impl SummaryModel {
    /// Every accepted model, in the order clients list them.
    pub const ALL: [Self; 4] = [
        Self::Grok2,
        Self::Grok2Vision,
        Self::GrokBeta,
        Self::GrokVisionBeta,
    ];

    /// Identifier sent to the completion API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grok2 => "grok-2-1212",
            Self::Grok2Vision => "grok-2-vision-1212",
            Self::GrokBeta => "grok-beta",
            Self::GrokVisionBeta => "grok-vision-beta",
        }
    }
}

impl fmt::Display for SummaryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryModel {
    type Err = CommitSummaryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| CommitSummaryValidationError::UnknownModel {
                model: s.to_owned(),
            })
    }
}

/// Validation failures for summary requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitSummaryValidationError {
    #[error("owner must not be empty")]
    EmptyOwner,
    #[error("repo must not be empty")]
    EmptyRepo,
    #[error("owner is not a valid repository owner name")]
    InvalidOwner,
    #[error("repo is not a valid repository name")]
    InvalidRepo,
    #[error("unsupported model: {model}")]
    UnknownModel { model: String },
}

/// `owner/repo` coordinates on the source-control host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner: String,
    repo: String,
}

impl RepositoryRef {
    /// Repository owner (user or organisation).
    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Repository name.
    pub fn repo(&self) -> &str {
        self.repo.as_str()
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// GitHub names use ASCII letters, digits, `-`, `_` and `.`; the dot-only
/// names would be resolved as relative URL segments.
fn is_repository_name(name: &str) -> bool {
    name != "."
        && name != ".."
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Validated summary request.
///
/// # Examples
/// ```
/// use loginapp::domain::{CommitSummaryRequest, SummaryModel};
///
/// let request = CommitSummaryRequest::try_from_parts("rust-lang", "rust", None).unwrap();
/// assert_eq!(request.repository().to_string(), "rust-lang/rust");
/// assert_eq!(request.model(), SummaryModel::Grok2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummaryRequest {
    repository: RepositoryRef,
    model: SummaryModel,
}

impl CommitSummaryRequest {
    /// Validate raw inputs. A missing or blank model selects the default.
    pub fn try_from_parts(
        owner: &str,
        repo: &str,
        model: Option<&str>,
    ) -> Result<Self, CommitSummaryValidationError> {
        let owner = owner.trim();
        if owner.is_empty() {
            return Err(CommitSummaryValidationError::EmptyOwner);
        }
        let repo = repo.trim();
        if repo.is_empty() {
            return Err(CommitSummaryValidationError::EmptyRepo);
        }
        if !is_repository_name(owner) {
            return Err(CommitSummaryValidationError::InvalidOwner);
        }
        if !is_repository_name(repo) {
            return Err(CommitSummaryValidationError::InvalidRepo);
        }
        let model = match model.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse()?,
            None => SummaryModel::default(),
        };
        Ok(Self {
            repository: RepositoryRef {
                owner: owner.to_owned(),
                repo: repo.to_owned(),
            },
            model,
        })
    }

    /// Repository whose commits are summarised.
    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    /// Selected model.
    pub fn model(&self) -> SummaryModel {
        self.model
    }
}

/// Message text of one commit, as returned by the source-control host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Wrap a commit message. Empty messages are kept so turn counts match
    /// commit counts.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Message text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Who a conversational turn is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// The requesting side.
    User,
}

/// One role-tagged message sent to the summarization API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

/// Complete request for the summarization API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPrompt {
    pub model: SummaryModel,
    pub turns: Vec<ConversationTurn>,
}

impl SummaryPrompt {
    /// Build a prompt with one user turn per commit, preserving order.
    pub fn from_commits(model: SummaryModel, commits: Vec<CommitMessage>) -> Self {
        let turns = commits
            .into_iter()
            .map(|CommitMessage(content)| ConversationTurn {
                role: TurnRole::User,
                content,
            })
            .collect();
        Self { model, turns }
    }
}
