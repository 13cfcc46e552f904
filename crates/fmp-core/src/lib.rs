#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fmp/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the FMP client.
//!
//! - [`Endpoint`](endpoint::Endpoint) - Static description of an upstream operation
//! - [`Schema`](schema::Schema) - Declared record shape with lenient validation
//! - [`Record`](record::Record) - Typed values built from validated records
//! - [`Payload`](payload::Payload) - Classification of decoded bodies
//! - [`Transport`](transport::Transport) - The HTTP seam

mod coerce;
/// Endpoint descriptors and request rendering.
pub mod endpoint;
/// Error types for FMP operations.
pub mod error;
/// Reporting period and chart interval definitions.
pub mod frequency;
/// Response body classification and error interpretation.
pub mod payload;
/// Request parameters.
pub mod query;
/// The typed record trait.
pub mod record;
/// Schemas, field kinds and validation diagnostics.
pub mod schema;
/// HTTP transport abstraction.
pub mod transport;
/// Core value types.
pub mod types;

pub use coerce::{DATETIME_FORMAT, DATE_FORMAT};
pub use endpoint::{
    ApiVersion, ArrayStyle, Cardinality, DATATYPE_PARAM, Endpoint, Format, Pagination, ParamKind,
    ParamLocation, ParamSpec, RenderedRequest, SchemaRule,
};
pub use error::{FmpError, Result};
pub use frequency::{Interval, Period};
pub use payload::{Fetched, Payload, interpret};
pub use query::{ParamValue, Params};
pub use record::{Fields, Record};
pub use schema::{FieldError, FieldKind, FieldProblem, FieldSpec, Presence, Schema, SchemaMismatch};
pub use transport::{RawResponse, Request, Transport};
pub use types::Symbol;
