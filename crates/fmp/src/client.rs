//! The [`Fmp`] client.

use std::sync::Arc;

use fmp_client::{ClientConfig, Executor};
use fmp_core::{Fetched, Params, Record, Result, Transport};
use serde_json::Value;
use tracing::debug;

use crate::dispatch::{Dispatcher, Normalized};
use crate::registry::Registry;

/// Typed client for the Financial Modeling Prep API.
///
/// Every call is an independent GET round trip. The client is cheap to clone
/// and can be shared between tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fmp::{Fmp, Params};
/// use fmp_models::Quote;
///
/// let fmp = Fmp::from_env()?;
/// let quotes = fmp
///     .fetch::<Quote>("batch-quote", &Params::new().with("symbols", &["AAPL", "MSFT"][..]))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct Fmp {
    executor: Executor,
    registry: &'static Registry,
}

impl Fmp {
    /// Create a client for `api_key` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Config`](fmp_core::FmpError::Config) if the HTTP
    /// client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from the environment (`FMP_API_KEY`, optionally
    /// loaded from `.env`).
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingApiKey`](fmp_core::FmpError::MissingApiKey)
    /// if no key is configured.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Config`](fmp_core::FmpError::Config) if the HTTP
    /// client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_executor(Executor::new(config)?))
    }

    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::with_executor(Executor::with_transport(config, transport))
    }

    fn with_executor(executor: Executor) -> Self {
        Self {
            executor,
            registry: Registry::global(),
        }
    }

    /// The request executor.
    #[must_use]
    pub const fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The endpoint registry.
    #[must_use]
    pub const fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// Call an endpoint by name and normalize the response into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::UnknownEndpoint`](fmp_core::FmpError::UnknownEndpoint)
    /// for unregistered names, and every error of [`Executor::execute`] and
    /// [`Dispatcher::dispatch`].
    pub async fn fetch<R: Record>(&self, endpoint: &str, params: &Params) -> Result<Normalized<R>> {
        let endpoint = self.registry.get(endpoint)?;
        let fetched = self.executor.execute(endpoint, params).await?;
        Dispatcher::new(endpoint).dispatch(fetched)
    }

    /// Walk every page of a paginated endpoint and normalize the concatenated
    /// records. `max_pages` caps the walk; `None` uses the configured
    /// ceiling.
    ///
    /// # Errors
    ///
    /// As [`Fmp::fetch`], plus
    /// [`FmpError::InvalidParameter`](fmp_core::FmpError::InvalidParameter)
    /// for endpoints that are not paginated.
    pub async fn fetch_all_pages<R: Record>(
        &self,
        endpoint: &str,
        params: &Params,
        max_pages: Option<u32>,
    ) -> Result<Normalized<R>> {
        let endpoint = self.registry.get(endpoint)?;
        let records = self
            .executor
            .fetch_all_pages(endpoint, params, max_pages)
            .await?;
        debug!(endpoint = endpoint.name, records = records.len(), "All pages fetched");
        Dispatcher::new(endpoint).normalize(records)
    }

    /// Call an endpoint by name and return the decoded body without
    /// interpreting it.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::UnknownEndpoint`](fmp_core::FmpError::UnknownEndpoint)
    /// and every error of [`Executor::execute`].
    pub async fn fetch_raw(&self, endpoint: &str, params: &Params) -> Result<Fetched> {
        let endpoint = self.registry.get(endpoint)?;
        self.executor.execute(endpoint, params).await
    }

    /// Download a file endpoint by name.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::UnknownEndpoint`](fmp_core::FmpError::UnknownEndpoint)
    /// and every error of [`Executor::fetch_bytes`].
    pub async fn fetch_bytes(&self, endpoint: &str, params: &Params) -> Result<Vec<u8>> {
        let endpoint = self.registry.get(endpoint)?;
        self.executor.fetch_bytes(endpoint, params).await
    }

    /// Call an endpoint by name and return the untyped, coerced records.
    ///
    /// # Errors
    ///
    /// As [`Fmp::fetch`].
    pub async fn fetch_json(&self, endpoint: &str, params: &Params) -> Result<Vec<Value>> {
        let records = self.fetch::<fmp_core::Fields>(endpoint, params).await?;
        Ok(records.into_iter().map(Value::Object).collect())
    }
}
