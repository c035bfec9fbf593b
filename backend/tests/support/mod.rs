//! Shared harness for HTTP integration tests.
//!
//! Builds the production route table over real domain services. Only the
//! driven ports named by each test are substituted.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use loginapp::Trace;
use loginapp::domain::ports::{
    CommitSource, CommitSourceError, SummaryGenerator, SummaryGeneratorError,
};
use loginapp::domain::{
    CommitMessage, CommitSummaryService, CredentialService, RepositoryRef, SummaryPrompt,
};
use loginapp::inbound::http::configure;
use loginapp::inbound::http::health::HealthState;
use loginapp::inbound::http::state::{HttpState, HttpStatePorts};
use loginapp::outbound::hashing::Argon2PasswordHasher;
use loginapp::outbound::memory::InMemoryUserRepository;

/// Commit source for tests that never reach the summary endpoint.
pub struct UnreachableCommitSource;

#[async_trait]
impl CommitSource for UnreachableCommitSource {
    async fn list_commits(
        &self,
        _repository: &RepositoryRef,
    ) -> Result<Vec<CommitMessage>, CommitSourceError> {
        Err(CommitSourceError::transport(
            "commit source not wired in this test",
        ))
    }
}

/// Generator for tests that never reach the summary endpoint.
pub struct UnreachableGenerator;

#[async_trait]
impl SummaryGenerator for UnreachableGenerator {
    async fn summarize(&self, _prompt: &SummaryPrompt) -> Result<String, SummaryGeneratorError> {
        Err(SummaryGeneratorError::not_configured())
    }
}

/// HTTP state over an in-memory store, real Argon2 hashing and the given
/// upstream adapters.
pub fn http_state<C, G>(commits: C, generator: G) -> web::Data<HttpState>
where
    C: CommitSource + 'static,
    G: SummaryGenerator + 'static,
{
    let credentials = Arc::new(CredentialService::new(
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(Argon2PasswordHasher::default()),
    ));
    let summarizer = Arc::new(CommitSummaryService::new(
        Arc::new(commits),
        Arc::new(generator),
    ));
    web::Data::new(HttpState::new(HttpStatePorts {
        signup: credentials.clone(),
        login: credentials.clone(),
        profile: credentials,
        summarizer,
    }))
}

/// Application wired like the server binary, minus Swagger UI.
pub fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new()
        .app_data(health)
        .app_data(state)
        .wrap(Trace)
        .configure(configure)
}
