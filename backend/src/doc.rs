//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers every HTTP endpoint from the
//! inbound layer together with the request, response and error envelope
//! schemas they reference.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{ErrorCode, SummaryModel, UserProfile};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::summaries::{SummarizeCommitsRequest, SummaryResponse};
use crate::inbound::http::users::{LoginRequest, SignupRequest, SignupResponse, UserResponse};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login app backend API",
        description = "HTTP interface for signup, login, profile lookup and commit summaries."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::profile,
        crate::inbound::http::summaries::summarize_commits,
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        LoginRequest,
        UserResponse,
        UserProfile,
        SummarizeCommitsRequest,
        SummaryResponse,
        SummaryModel,
        ErrorEnvelope,
        ErrorCode
    )),
    tags(
        (name = "users", description = "Signup, login and profile lookup"),
        (name = "summaries", description = "Commit history summaries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
