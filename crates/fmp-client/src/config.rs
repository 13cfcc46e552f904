//! Client configuration.

use fmp_core::{FmpError, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Default API host.
pub const DEFAULT_HOST: &str = "https://financialmodelingprep.com";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default ceiling on pages fetched by one paginated call.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Connection settings for the FMP API.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    host: String,
    timeout: Duration,
    connect_timeout: Duration,
    max_pages: u32,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults for
    /// everything else.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Create a configuration from the environment.
    ///
    /// Loads a `.env` file if present, then reads `FMP_API_KEY` (required),
    /// `FMP_HOST` and `FMP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingApiKey`] if no key is set and
    /// [`FmpError::Config`] if `FMP_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FmpError::MissingApiKey)?;
        let mut config = Self::new(api_key.trim());

        if let Ok(host) = env::var("FMP_HOST") {
            config = config.with_host(host);
        }
        if let Ok(secs) = env::var("FMP_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| FmpError::Config(format!("FMP_TIMEOUT_SECS={secs:?}: {e}")))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Use a different host, e.g. a proxy or a test server.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the ceiling on pages fetched by one paginated call. At least one
    /// page is always fetched.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The API host, without trailing slash.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The whole-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// The page ceiling.
    #[must_use]
    pub const fn max_pages(&self) -> u32 {
        self.max_pages
    }
}
