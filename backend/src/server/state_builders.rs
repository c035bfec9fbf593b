//! Builders wiring outbound adapters into the HTTP state.

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use loginapp::domain::ports::{
    LoginService, PasswordHasher, SignupService, UserProfileQuery, UserRepository,
};
use loginapp::domain::{CommitSummaryService, CredentialService};
use loginapp::inbound::http::state::{HttpState, HttpStatePorts};
use loginapp::outbound::github::GithubCommitSource;
use loginapp::outbound::hashing::Argon2PasswordHasher;
use loginapp::outbound::llm::ChatCompletionGenerator;
use loginapp::outbound::memory::InMemoryUserRepository;
use loginapp::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

type CredentialPorts = (
    Arc<dyn SignupService>,
    Arc<dyn LoginService>,
    Arc<dyn UserProfileQuery>,
);

/// One credential service behind all three user-facing ports.
fn credential_ports<R, H>(repository: Arc<R>, hasher: Arc<H>) -> CredentialPorts
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let service = Arc::new(CredentialService::new(repository, hasher));
    (service.clone(), service.clone(), service)
}

/// Build the HTTP state, using Diesel when a pool is configured and an
/// in-memory repository otherwise.
///
/// # Errors
/// Returns [`io::Error`] when an upstream HTTP client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> io::Result<web::Data<HttpState>> {
    let hasher = Arc::new(Argon2PasswordHasher::default());
    let (signup, login, profile) = match &config.db_pool {
        Some(pool) => credential_ports(Arc::new(DieselUserRepository::new(pool.clone())), hasher),
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            credential_ports(Arc::new(InMemoryUserRepository::default()), hasher)
        }
    };

    let commits = GithubCommitSource::new(
        config.github.base_url.clone(),
        config.github.token.clone(),
        config.github.timeout,
    )
    .map_err(|err| io::Error::other(format!("GitHub client construction failed: {err}")))?;
    let generator = ChatCompletionGenerator::new(
        config.llm.base_url.clone(),
        config.llm.token.clone(),
        config.llm.timeout,
    )
    .map_err(|err| io::Error::other(format!("completion client construction failed: {err}")))?;
    if config.llm.token.is_none() {
        warn!("no chat-completion API key configured; commit summaries will fail");
    }
    let summarizer = Arc::new(CommitSummaryService::new(
        Arc::new(commits),
        Arc::new(generator),
    ));

    Ok(web::Data::new(HttpState::new(HttpStatePorts {
        signup,
        login,
        profile,
        summarizer,
    })))
}
