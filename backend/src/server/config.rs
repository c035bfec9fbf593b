//! HTTP server configuration object and helpers.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use loginapp::config::AppSettings;
use loginapp::outbound::persistence::DbPool;
use url::Url;
use zeroize::Zeroizing;

/// Endpoint, credential and timeout for one upstream HTTP API.
#[derive(Clone)]
pub struct UpstreamEndpoint {
    pub(crate) base_url: Url,
    pub(crate) token: Option<Zeroizing<String>>,
    pub(crate) timeout: Duration,
}

impl UpstreamEndpoint {
    fn parse(
        name: &str,
        raw_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> io::Result<Self> {
        let base_url = Url::parse(raw_url).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid {name} URL {raw_url:?}: {err}"),
            )
        })?;
        Ok(Self {
            base_url,
            token: token.map(|value| Zeroizing::new(value.to_owned())),
            timeout,
        })
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) github: UpstreamEndpoint,
    pub(crate) llm: UpstreamEndpoint,
}

impl ServerConfig {
    /// Validate loaded settings into a server configuration.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] when the bind address or an
    /// upstream URL does not parse.
    pub fn from_settings(settings: &AppSettings) -> io::Result<Self> {
        let bind_addr = settings.bind_addr().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address {:?}: {err}", settings.bind_addr()),
            )
        })?;
        Ok(Self {
            bind_addr,
            db_pool: None,
            github: UpstreamEndpoint::parse(
                "GitHub API",
                settings.github_api_url(),
                settings.github_token(),
                settings.github_timeout(),
            )?,
            llm: UpstreamEndpoint::parse(
                "chat-completion API",
                settings.llm_api_url(),
                settings.llm_api_key(),
                settings.llm_timeout(),
            )?,
        })
    }

    /// Attach a database connection pool for the user repository.
    ///
    /// Without one, users are kept in process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
