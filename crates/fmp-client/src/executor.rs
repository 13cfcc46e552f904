//! Request execution and body decoding.

use fmp_core::{
    ApiVersion, Endpoint, Fetched, FmpError, Format, Params, Request, Result, Transport, interpret,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::http::HttpTransport;

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "apikey";

/// Sends endpoint requests through a [`Transport`] and decodes the bodies.
///
/// The executor is stateless apart from its configuration; clones share the
/// transport.
#[derive(Clone, Debug)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Executor {
    /// Create an executor over a reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Config`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create an executor over any transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL of `path` under the given API version.
    #[must_use]
    pub fn url(&self, version: ApiVersion, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.host(),
            version.prefix(),
            path.trim_start_matches('/')
        )
    }

    /// Render the request for `endpoint`. The API key is the last query pair.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] if `params` do not satisfy the
    /// endpoint's parameter contract.
    pub fn request(&self, endpoint: &Endpoint, params: &Params) -> Result<Request> {
        let rendered = endpoint.render(params)?;
        let mut query = rendered.query;
        query.push((API_KEY_PARAM.to_string(), self.config.api_key().to_string()));
        Ok(Request::new(self.url(endpoint.version, &rendered.path), query))
    }

    /// Perform one GET for `endpoint` and decode the body.
    ///
    /// Any status is returned as data; interpreting it is up to the caller.
    /// A `datatype=csv` parameter decodes the body as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] for bad parameters and for file
    /// downloads, [`FmpError::Transport`] when no response arrived, and
    /// [`FmpError::Decode`] when a 2xx body is neither JSON nor CSV.
    pub async fn execute(&self, endpoint: &Endpoint, params: &Params) -> Result<Fetched> {
        let format = endpoint.response_format(params);
        if format == Format::Binary {
            return Err(FmpError::InvalidParameter(format!(
                "{} is a file download; fetch it as bytes",
                endpoint.name
            )));
        }
        let request = self.request(endpoint, params)?;
        debug!(
            endpoint = endpoint.name,
            version = %endpoint.version,
            url = %request.url,
            "FMP request"
        );

        let response = self.transport.get(&request).await?;
        let body = decode(format, response.status, &response.body)?;
        debug!(endpoint = endpoint.name, status = response.status, "FMP response");

        Ok(Fetched::new(response.status, body))
    }

    /// Perform one GET for a file download and return the body bytes.
    ///
    /// Failed statuses and JSON error bodies are classified like any other
    /// response. An empty 2xx body yields no bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] for bad parameters,
    /// [`FmpError::Transport`] when no response arrived, and the error of
    /// [`interpret`] when upstream refused the download.
    pub async fn fetch_bytes(&self, endpoint: &Endpoint, params: &Params) -> Result<Vec<u8>> {
        let request = self.request(endpoint, params)?;
        debug!(endpoint = endpoint.name, url = %request.url, "FMP download");

        let response = self.transport.get(&request).await?;
        debug!(
            endpoint = endpoint.name,
            status = response.status,
            bytes = response.body.len(),
            "FMP download finished"
        );
        if is_success(response.status) && !looks_like_json(&response.body) {
            if response.body.is_empty() {
                warn!(endpoint = endpoint.name, "Download returned no data");
            }
            return Ok(response.body);
        }

        let body = decode(Format::Json, response.status, &response.body)?;
        interpret(Fetched::new(response.status, body), None)?;
        Ok(response.body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn looks_like_json(body: &[u8]) -> bool {
    matches!(body.trim_ascii_start().first(), Some(b'{' | b'['))
}

/// Decode a raw body.
///
/// Empty bodies decode to `null`. Bodies that look like JSON are decoded as
/// JSON even on CSV endpoints, since upstream reports errors as JSON there
/// too. Undecodable bodies of failed responses are kept as text so the error
/// message survives.
pub(crate) fn decode(format: Format, status: u16, body: &[u8]) -> Result<Value> {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    let decoded = if looks_like_json(trimmed.as_bytes()) || format == Format::Json {
        serde_json::from_str(trimmed).map_err(|e| format!("invalid JSON: {e}"))
    } else {
        decode_csv(trimmed).map_err(|e| format!("invalid CSV: {e}"))
    };

    match decoded {
        Ok(value) => Ok(value),
        Err(_) if !is_success(status) => Ok(Value::String(trimmed.to_string())),
        Err(e) => Err(FmpError::Decode(e)),
    }
}

/// Decode a CSV body with a header row into an array of objects. Cells are
/// kept as strings; empty cells become `null`.
fn decode_csv(text: &str) -> std::result::Result<Value, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(name, cell)| {
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                (name.to_string(), value)
            })
            .collect();
        rows.push(Value::Object(row));
    }

    Ok(Value::Array(rows))
}
