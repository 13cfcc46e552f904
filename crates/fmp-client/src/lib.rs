#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fmp/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Usage
//!
//! ```rust,ignore
//! use fmp_client::{ClientConfig, Executor};
//! use fmp_core::{Endpoint, Params, interpret};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let executor = Executor::new(ClientConfig::from_env()?)?;
//!
//!     let fetched = executor
//!         .execute(&QUOTE, &Params::new().with("symbol", "AAPL"))
//!         .await?;
//!     let payload = interpret(fetched, QUOTE.envelope)?;
//!
//!     Ok(())
//! }
//! ```

/// Connection settings.
pub mod config;
/// Request execution and body decoding.
pub mod executor;
/// reqwest transport.
pub mod http;
mod paginate;

pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_MAX_PAGES};
pub use executor::Executor;
pub use http::HttpTransport;
