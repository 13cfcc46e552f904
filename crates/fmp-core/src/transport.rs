//! The HTTP seam.
//!
//! The executor never talks to the network directly; it hands a [`Request`]
//! to a [`Transport`]. Production code uses the reqwest implementation in
//! `fmp-client`, tests script responses.

use async_trait::async_trait;
use std::fmt;

use crate::error::Result;

/// A fully rendered GET request.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    /// Absolute URL without query string.
    pub url: String,
    /// Query pairs in send order, API key last.
    pub query: Vec<(String, String)>,
}

impl Request {
    /// Creates a request.
    #[must_use]
    pub const fn new(url: String, query: Vec<(String, String)>) -> Self {
        Self { url, query }
    }

    /// Returns the first value of a query parameter.
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query: Vec<_> = self
            .query
            .iter()
            .map(|(n, v)| if n == "apikey" { (n.as_str(), "[REDACTED]") } else { (n.as_str(), v.as_str()) })
            .collect();
        f.debug_struct("Request")
            .field("url", &self.url)
            .field("query", &query)
            .finish()
    }
}

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs HTTP GET requests.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status, and [`FmpError::Transport`](crate::FmpError::Transport) when no
/// response arrived at all.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends one request.
    async fn get(&self, request: &Request) -> Result<RawResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let request = Request::new(
            "https://financialmodelingprep.com/stable/quote".to_string(),
            vec![
                ("symbol".to_string(), "AAPL".to_string()),
                ("apikey".to_string(), "secret-key".to_string()),
            ],
        );
        let debug = format!("{request:?}");
        assert!(debug.contains("AAPL"));
        assert!(!debug.contains("secret-key"));
        assert_eq!(request.query_value("apikey"), Some("secret-key"));
    }

    #[derive(Debug)]
    struct Echo;

    #[async_trait]
    impl Transport for Echo {
        async fn get(&self, request: &Request) -> Result<RawResponse> {
            Ok(RawResponse::new(200, request.url.clone()))
        }
    }

    #[tokio::test]
    async fn test_transport_object_safety() {
        let transport: Box<dyn Transport> = Box::new(Echo);
        let response = transport
            .get(&Request::new("https://example.test/x".to_string(), Vec::new()))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"https://example.test/x");
    }
}
