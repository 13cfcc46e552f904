//! Real-time quotes.
//!
//! The quote endpoints answer with a differently shaped record depending on
//! the asset class of the symbol. Each shape has its own record type; [`Quote`]
//! wraps whichever one the dispatcher selected.

use fmp_core::{Fields, Record, Schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

record! {
    /// Quote of a stock or fund.
    pub struct EquityQuote as "equity-quote" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Security name.
        name: Option<String> = "name" => Text, optional;
        /// Last price.
        price: f64 = "price" => Number;
        /// Change in percent.
        change_percentage: f64 = "changePercentage" => Number;
        /// Absolute change.
        change: f64 = "change" => Number;
        /// Session volume.
        volume: Option<i64> = "volume" => Integer, optional;
        /// Session low.
        day_low: Option<f64> = "dayLow" => Number, optional;
        /// Session high.
        day_high: Option<f64> = "dayHigh" => Number, optional;
        /// 52 week high.
        year_high: Option<f64> = "yearHigh" => Number, optional;
        /// 52 week low.
        year_low: Option<f64> = "yearLow" => Number, optional;
        /// Market capitalization.
        market_cap: f64 = "marketCap" => Number;
        /// 50 day average price.
        price_avg_50: Option<f64> = "priceAvg50" => Number, optional;
        /// 200 day average price.
        price_avg_200: Option<f64> = "priceAvg200" => Number, optional;
        /// Exchange short name.
        exchange: String = "exchange" => Text;
        /// Session open.
        open: Option<f64> = "open" => Number, optional;
        /// Previous close.
        previous_close: Option<f64> = "previousClose" => Number, optional;
        /// Unix timestamp in seconds.
        timestamp: i64 = "timestamp" => Integer;
    }
}

record! {
    /// Quote of a market index. Indices have no market cap or meaningful volume.
    pub struct IndexQuote as "index-quote" {
        /// Index symbol, e.g. `^GSPC`.
        symbol: String = "symbol" => Text;
        /// Index name.
        name: Option<String> = "name" => Text, optional;
        /// Last level.
        price: f64 = "price" => Number;
        /// Change in percent.
        change_percentage: f64 = "changePercentage" => Number;
        /// Absolute change.
        change: f64 = "change" => Number;
        /// Session low.
        day_low: Option<f64> = "dayLow" => Number, optional;
        /// Session high.
        day_high: Option<f64> = "dayHigh" => Number, optional;
        /// 52 week high.
        year_high: Option<f64> = "yearHigh" => Number, optional;
        /// 52 week low.
        year_low: Option<f64> = "yearLow" => Number, optional;
        /// Exchange, usually `INDEX`.
        exchange: Option<String> = "exchange" => Text, optional;
        /// Session open.
        open: Option<f64> = "open" => Number, optional;
        /// Previous close.
        previous_close: Option<f64> = "previousClose" => Number, optional;
        /// Unix timestamp in seconds.
        timestamp: i64 = "timestamp" => Integer;
    }
}

record! {
    /// Quote of a currency pair or cryptocurrency.
    pub struct CurrencyQuote as "currency-quote" {
        /// Pair symbol, e.g. `EURUSD` or `BTCUSD`.
        symbol: String = "symbol" => Text;
        /// Pair name.
        name: Option<String> = "name" => Text, optional;
        /// Last rate.
        price: f64 = "price" => Number;
        /// Change in percent.
        change_percentage: f64 = "changePercentage" => Number;
        /// Absolute change.
        change: f64 = "change" => Number;
        /// Session volume.
        volume: Option<f64> = "volume" => Number, optional;
        /// Session low.
        day_low: Option<f64> = "dayLow" => Number, optional;
        /// Session high.
        day_high: Option<f64> = "dayHigh" => Number, optional;
        /// 52 week high.
        year_high: Option<f64> = "yearHigh" => Number, optional;
        /// 52 week low.
        year_low: Option<f64> = "yearLow" => Number, optional;
        /// Market capitalization, for cryptocurrencies.
        market_cap: Option<f64> = "marketCap" => Number, optional;
        /// `FOREX` or `CRYPTO`.
        exchange: String = "exchange" => Text;
        /// Session open.
        open: Option<f64> = "open" => Number, optional;
        /// Previous close.
        previous_close: Option<f64> = "previousClose" => Number, optional;
        /// Unix timestamp in seconds.
        timestamp: i64 = "timestamp" => Integer;
    }
}

record! {
    /// Quote of a commodity future.
    pub struct CommodityQuote as "commodity-quote" {
        /// Contract symbol, e.g. `GCUSD`.
        symbol: String = "symbol" => Text;
        /// Contract name.
        name: Option<String> = "name" => Text, optional;
        /// Last price.
        price: f64 = "price" => Number;
        /// Change in percent.
        change_percentage: f64 = "changePercentage" => Number;
        /// Absolute change.
        change: f64 = "change" => Number;
        /// Session volume.
        volume: Option<i64> = "volume" => Integer, optional;
        /// Session low.
        day_low: Option<f64> = "dayLow" => Number, optional;
        /// Session high.
        day_high: Option<f64> = "dayHigh" => Number, optional;
        /// Exchange, usually `COMMODITY`.
        exchange: String = "exchange" => Text;
        /// Session open.
        open: Option<f64> = "open" => Number, optional;
        /// Previous close.
        previous_close: Option<f64> = "previousClose" => Number, optional;
        /// Unix timestamp in seconds.
        timestamp: i64 = "timestamp" => Integer;
    }
}

/// A quote of any asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assetClass", rename_all = "lowercase")]
pub enum Quote {
    /// Market index.
    Index(IndexQuote),
    /// Currency pair or cryptocurrency.
    Currency(CurrencyQuote),
    /// Commodity future.
    Commodity(CommodityQuote),
    /// Stock or fund.
    Equity(EquityQuote),
}

impl Quote {
    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Index(q) => &q.symbol,
            Self::Currency(q) => &q.symbol,
            Self::Commodity(q) => &q.symbol,
            Self::Equity(q) => &q.symbol,
        }
    }

    /// Last price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        match self {
            Self::Index(q) => q.price,
            Self::Currency(q) => q.price,
            Self::Commodity(q) => q.price,
            Self::Equity(q) => q.price,
        }
    }

    /// Absolute change.
    #[must_use]
    pub const fn change(&self) -> f64 {
        match self {
            Self::Index(q) => q.change,
            Self::Currency(q) => q.change,
            Self::Commodity(q) => q.change,
            Self::Equity(q) => q.change,
        }
    }

    /// Unix timestamp in seconds.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        match self {
            Self::Index(q) => q.timestamp,
            Self::Currency(q) => q.timestamp,
            Self::Commodity(q) => q.timestamp,
            Self::Equity(q) => q.timestamp,
        }
    }
}

impl Record for Quote {
    const SCHEMAS: &'static [&'static Schema] = &[
        &IndexQuote::SCHEMA,
        &CurrencyQuote::SCHEMA,
        &CommodityQuote::SCHEMA,
        &EquityQuote::SCHEMA,
    ];

    fn from_fields(schema: &'static Schema, fields: Fields) -> serde_json::Result<Self> {
        let value = Value::Object(fields);
        match schema.name {
            name if name == IndexQuote::SCHEMA.name => serde_json::from_value(value).map(Self::Index),
            name if name == CurrencyQuote::SCHEMA.name => serde_json::from_value(value).map(Self::Currency),
            name if name == CommodityQuote::SCHEMA.name => serde_json::from_value(value).map(Self::Commodity),
            _ => serde_json::from_value(value).map(Self::Equity),
        }
    }
}

fn exchange_of(record: &Value) -> Option<String> {
    record
        .get("exchange")
        .and_then(Value::as_str)
        .map(|e| e.trim().to_ascii_uppercase())
}

/// Selects [`IndexQuote`]: `INDEX` exchange or a `^` symbol.
#[must_use]
pub fn is_index_quote(record: &Value) -> bool {
    exchange_of(record).as_deref() == Some("INDEX")
        || record
            .get("symbol")
            .and_then(Value::as_str)
            .is_some_and(|s| s.starts_with('^'))
}

/// Selects [`CurrencyQuote`]: `FOREX` or `CRYPTO` exchange.
#[must_use]
pub fn is_currency_quote(record: &Value) -> bool {
    matches!(exchange_of(record).as_deref(), Some("FOREX" | "CRYPTO"))
}

/// Selects [`CommodityQuote`]: `COMMODITY` exchange.
#[must_use]
pub fn is_commodity_quote(record: &Value) -> bool {
    exchange_of(record).as_deref() == Some("COMMODITY")
}

record! {
    /// Short quote: price, change and volume only.
    pub struct ShortQuote as "short-quote" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Last price.
        price: f64 = "price" => Number;
        /// Absolute change.
        change: Option<f64> = "change" => Number, optional;
        /// Session volume.
        volume: Option<i64> = "volume" => Integer, optional;
    }
}

record! {
    /// Best bid and ask outside regular trading hours.
    pub struct AftermarketQuote as "aftermarket-quote" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Bid size.
        bid_size: Option<i64> = "bidSize" => Integer, optional;
        /// Bid price.
        bid_price: f64 = "bidPrice" => Number;
        /// Ask size.
        ask_size: Option<i64> = "askSize" => Integer, optional;
        /// Ask price.
        ask_price: f64 = "askPrice" => Number;
        /// Volume.
        volume: Option<i64> = "volume" => Integer, optional;
        /// Unix timestamp in milliseconds.
        timestamp: i64 = "timestamp" => Integer;
    }
}

impl AftermarketQuote {
    /// Midpoint between bid and ask.
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.bid_price + self.ask_price) / 2.0
    }
}

record! {
    /// Price change in percent over standard horizons.
    pub struct PriceChange as "price-change" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// One day.
        one_day: Option<f64> = "1D" => Number, optional;
        /// Five days.
        five_day: Option<f64> = "5D" => Number, optional;
        /// One month.
        one_month: Option<f64> = "1M" => Number, optional;
        /// Three months.
        three_month: Option<f64> = "3M" => Number, optional;
        /// Six months.
        six_month: Option<f64> = "6M" => Number, optional;
        /// Year to date.
        ytd: Option<f64> = "ytd" => Number, optional;
        /// One year.
        one_year: Option<f64> = "1Y" => Number, optional;
        /// Three years.
        three_year: Option<f64> = "3Y" => Number, optional;
        /// Five years.
        five_year: Option<f64> = "5Y" => Number, optional;
        /// Ten years.
        ten_year: Option<f64> = "10Y" => Number, optional;
        /// Since listing.
        max: Option<f64> = "max" => Number, optional;
    }
}
