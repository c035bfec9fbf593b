//! Commit-summary API handler.
//!
//! ```text
//! POST /summarize-commits {"owner":"rust-lang","repo":"rust","model":"grok-2-1212"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{CommitSummaryRequest, CommitSummaryValidationError, Error, SummaryModel};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /summarize-commits`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeCommitsRequest {
    #[serde(default)]
    #[schema(example = "rust-lang")]
    pub owner: Option<String>,
    #[serde(default)]
    #[schema(example = "rust")]
    pub repo: Option<String>,
    /// Defaults to `grok-2-1212` when omitted.
    #[serde(default)]
    #[schema(value_type = Option<SummaryModel>)]
    pub model: Option<String>,
}

impl TryFrom<SummarizeCommitsRequest> for CommitSummaryRequest {
    type Error = CommitSummaryValidationError;

    fn try_from(value: SummarizeCommitsRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.owner.as_deref().unwrap_or_default(),
            value.repo.as_deref().unwrap_or_default(),
            value.model.as_deref(),
        )
    }
}

/// Body returned by `POST /summarize-commits`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
}

fn map_validation_error(err: CommitSummaryValidationError) -> Error {
    match err {
        CommitSummaryValidationError::EmptyOwner => Error::invalid_request("owner is required")
            .with_details(json!({ "field": "owner", "code": "missing_field" })),
        CommitSummaryValidationError::EmptyRepo => Error::invalid_request("repo is required")
            .with_details(json!({ "field": "repo", "code": "missing_field" })),
        CommitSummaryValidationError::InvalidOwner => Error::invalid_request("owner is invalid")
            .with_details(json!({ "field": "owner", "code": "invalid_format" })),
        CommitSummaryValidationError::InvalidRepo => Error::invalid_request("repo is invalid")
            .with_details(json!({ "field": "repo", "code": "invalid_format" })),
        CommitSummaryValidationError::UnknownModel { model } => {
            let allowed: Vec<_> = SummaryModel::ALL.iter().map(|m| m.as_str()).collect();
            Error::invalid_request(format!("unsupported model: {model}")).with_details(json!({
                "field": "model",
                "code": "unsupported_model",
                "allowed": allowed,
            }))
        }
    }
}

/// Summarise a repository's commit history with a language model.
#[utoipa::path(
    post,
    path = "/summarize-commits",
    request_body = SummarizeCommitsRequest,
    responses(
        (status = 200, description = "Generated summary", body = SummaryResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 404, description = "Repository not found", body = ErrorEnvelope),
        (status = 500, description = "Upstream failure", body = ErrorEnvelope)
    ),
    tags = ["summaries"],
    operation_id = "summarizeCommits"
)]
#[post("/summarize-commits")]
pub async fn summarize_commits(
    state: web::Data<HttpState>,
    payload: web::Json<SummarizeCommitsRequest>,
) -> ApiResult<web::Json<SummaryResponse>> {
    let request =
        CommitSummaryRequest::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let summary = state.summarizer.summarize(&request).await?;
    Ok(web::Json(SummaryResponse {
        success: true,
        summary,
    }))
}
