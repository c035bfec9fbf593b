//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CommitSummarizer, LoginService, SignupService, UserProfileQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub profile: Arc<dyn UserProfileQuery>,
    pub summarizer: Arc<dyn CommitSummarizer>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub profile: Arc<dyn UserProfileQuery>,
    pub summarizer: Arc<dyn CommitSummarizer>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use loginapp::domain::{CommitSummaryService, CredentialService};
    /// use loginapp::inbound::http::state::{HttpState, HttpStatePorts};
    /// use loginapp::outbound::github::GithubCommitSource;
    /// use loginapp::outbound::hashing::Argon2PasswordHasher;
    /// use loginapp::outbound::llm::ChatCompletionGenerator;
    /// use loginapp::outbound::memory::InMemoryUserRepository;
    ///
    /// # fn build(commits: GithubCommitSource, generator: ChatCompletionGenerator) {
    /// let credentials = Arc::new(CredentialService::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(Argon2PasswordHasher::default()),
    /// ));
    /// let summarizer = Arc::new(CommitSummaryService::new(
    ///     Arc::new(commits),
    ///     Arc::new(generator),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     signup: credentials.clone(),
    ///     login: credentials.clone(),
    ///     profile: credentials,
    ///     summarizer,
    /// });
    /// let _login = state.login.clone();
    /// # }
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            signup,
            login,
            profile,
            summarizer,
        } = ports;
        Self {
            signup,
            login,
            profile,
            summarizer,
        }
    }
}
