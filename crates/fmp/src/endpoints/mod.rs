//! Typed wrappers, one per catalog endpoint.
//!
//! Each wrapper maps its arguments onto [`Params`](fmp_core::Params) and
//! calls [`Fmp::fetch`](crate::Fmp::fetch) with the endpoint name. Optional
//! arguments left as `None` are not sent.

mod analyst;
mod bulk;
mod calendars;
mod charts;
mod company;
mod directory;
mod filings;
mod quotes;
mod search;
mod statements;

pub use search::ScreenerFilter;
