#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fmp/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Features
//!
//! - `polars` - Conversion of daily prices into polars `DataFrame`s (default)

// Core types and traits
pub use fmp_core::*;

// Record types
pub use fmp_models as models;

// Transport and configuration
pub use fmp_client::{ClientConfig, DEFAULT_HOST, DEFAULT_MAX_PAGES, Executor, HttpTransport};

pub mod catalog;
mod client;
pub mod dispatch;
mod endpoints;
#[cfg(feature = "polars")]
mod frame;
mod registry;

pub use client::Fmp;
pub use dispatch::{Data, Dispatcher, Normalized};
pub use endpoints::ScreenerFilter;
#[cfg(feature = "polars")]
pub use frame::prices_to_frame;
pub use registry::Registry;
