//! Application settings loaded via OrthoConfig.
//!
//! Values come from `LOGINAPP_*` environment variables, an optional
//! configuration file and command-line flags, in increasing precedence.
//! Timeouts carry declared defaults; accessors supply the remaining ones.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com/";
const DEFAULT_LLM_API_URL: &str = "https://api.x.ai/v1/";

/// Runtime settings for the server and its outbound adapters.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGINAPP")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Unset selects the in-memory store.
    pub database_url: Option<String>,
    /// Bearer token for the GitHub API.
    pub github_token: Option<String>,
    /// Base URL of the GitHub REST API.
    pub github_api_url: Option<String>,
    /// Timeout for commit listing requests, in seconds.
    #[ortho_config(default = 30)]
    pub github_timeout_secs: u64,
    /// Bearer token for the chat-completion API.
    pub llm_api_key: Option<String>,
    /// Base URL of the chat-completion API.
    pub llm_api_url: Option<String>,
    /// Timeout for completion requests, in seconds.
    #[ortho_config(default = 30)]
    pub llm_timeout_secs: u64,
}

impl AppSettings {
    /// Bind address, falling back to `0.0.0.0:5000`.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Database URL, if persistence is configured.
    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_deref())
    }

    /// GitHub token, if configured.
    pub fn github_token(&self) -> Option<&str> {
        non_blank(self.github_token.as_deref())
    }

    /// GitHub API base URL.
    pub fn github_api_url(&self) -> &str {
        self.github_api_url
            .as_deref()
            .unwrap_or(DEFAULT_GITHUB_API_URL)
    }

    /// Commit listing timeout.
    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_secs)
    }

    /// Chat-completion API key, if configured.
    pub fn llm_api_key(&self) -> Option<&str> {
        non_blank(self.llm_api_key.as_deref())
    }

    /// Chat-completion API base URL.
    pub fn llm_api_url(&self) -> &str {
        self.llm_api_url.as_deref().unwrap_or(DEFAULT_LLM_API_URL)
    }

    /// Completion request timeout.
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("AppSettings")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &redact(&self.database_url))
            .field("github_token", &redact(&self.github_token))
            .field("github_api_url", &self.github_api_url)
            .field("github_timeout_secs", &self.github_timeout_secs)
            .field("llm_api_key", &redact(&self.llm_api_key))
            .field("llm_api_url", &self.llm_api_url)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .finish()
    }
}
