#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fmp/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

/// Fundamental ratings.
pub mod analyst;
/// Dividends, earnings, splits and IPOs.
pub mod calendar;
/// Historical prices.
pub mod chart;
/// Company profiles and reference data.
pub mod company;
/// Symbol, exchange and sector lists.
pub mod directory;
/// SEC filings.
pub mod filings;
/// Quotes.
pub mod quote;
/// Search results.
pub mod search;
/// Financial statements, key metrics and ratios.
pub mod statements;

pub use analyst::{HistoricalRating, RatingSnapshot};
pub use calendar::{Dividend, EarningsEvent, IpoEvent, Split};
pub use chart::{HistoricalPrice, IntradayBar, LegacyHistoricalPrice, LightPrice};
pub use company::{
    CompanyProfile, DelistedCompany, EmployeeCount, Executive, MarketCap, ShareFloat, StockPeer,
};
pub use directory::{Cryptocurrency, Exchange, ForexPair, ListedSymbol, Sector};
pub use filings::{SecCompany, SecFiling};
pub use quote::{
    AftermarketQuote, CommodityQuote, CurrencyQuote, EquityQuote, IndexQuote, PriceChange, Quote,
    ShortQuote,
};
pub use search::{CikMatch, ScreenerResult, SymbolMatch};
pub use statements::{BalanceSheet, CashFlowStatement, FinancialRatios, IncomeStatement, KeyMetrics};
