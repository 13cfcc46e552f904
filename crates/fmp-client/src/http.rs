//! reqwest-backed transport.

use async_trait::async_trait;
use fmp_core::{FmpError, RawResponse, Request, Result, Transport};
use reqwest::Client;
use std::fmt;

use crate::config::ClientConfig;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("fmp-rs/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] over a reqwest [`Client`].
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport with the timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| FmpError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &Request) -> Result<RawResponse> {
        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            // reqwest errors embed the URL, and with it the API key.
            .map_err(|e| FmpError::transport(e.without_url()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FmpError::transport(e.without_url()))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builds_from_config() {
        let config = ClientConfig::new("test_key").with_timeout(Duration::from_secs(1));
        let transport = HttpTransport::new(&config).unwrap();
        assert!(format!("{transport:?}").starts_with("HttpTransport"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let config = ClientConfig::new("test_key").with_connect_timeout(Duration::from_millis(200));
        let transport = HttpTransport::new(&config).unwrap();
        // Port 9 (discard) on localhost is closed on test machines.
        let request = Request::new(
            "http://127.0.0.1:9/stable/quote".to_string(),
            vec![("apikey".to_string(), "secret-key".to_string())],
        );
        let err = transport.get(&request).await.unwrap_err();
        assert!(err.is_transport());
        assert!(!err.to_string().contains("secret-key"));
    }
}
