//! Historical price series.

use chrono::{NaiveDate, NaiveDateTime};

record! {
    /// End-of-day close and volume.
    pub struct LightPrice as "eod-light" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Trading day.
        date: NaiveDate = "date" => Date;
        /// Close.
        price: f64 = "price" => Number;
        /// Volume.
        volume: Option<i64> = "volume" => Integer, optional;
    }
}

record! {
    /// Full end-of-day bar.
    pub struct HistoricalPrice as "eod-full" {
        /// Ticker symbol.
        symbol: Option<String> = "symbol" => Text, optional;
        /// Trading day.
        date: NaiveDate = "date" => Date;
        /// Open.
        open: f64 = "open" => Number;
        /// High.
        high: f64 = "high" => Number;
        /// Low.
        low: f64 = "low" => Number;
        /// Close.
        close: f64 = "close" => Number;
        /// Volume.
        volume: Option<i64> = "volume" => Integer, optional;
        /// Change from the previous close.
        change: Option<f64> = "change" => Number, optional;
        /// Change in percent.
        change_percent: Option<f64> = "changePercent" => Number, optional;
        /// Volume-weighted average price.
        vwap: Option<f64> = "vwap" => Number, optional;
    }
}

record! {
    /// Intraday bar.
    pub struct IntradayBar as "intraday-bar" {
        /// Bar start time, exchange local.
        date: NaiveDateTime = "date" => DateTime;
        /// Open.
        open: f64 = "open" => Number;
        /// Low.
        low: f64 = "low" => Number;
        /// High.
        high: f64 = "high" => Number;
        /// Close.
        close: f64 = "close" => Number;
        /// Volume.
        volume: Option<i64> = "volume" => Integer, optional;
    }
}

record! {
    /// End-of-day bar from the legacy v3 API, delivered inside a
    /// `historical` envelope.
    pub struct LegacyHistoricalPrice as "legacy-eod" {
        /// Trading day.
        date: NaiveDate = "date" => Date;
        /// Open.
        open: f64 = "open" => Number;
        /// High.
        high: f64 = "high" => Number;
        /// Low.
        low: f64 = "low" => Number;
        /// Close.
        close: f64 = "close" => Number;
        /// Split and dividend adjusted close.
        adj_close: Option<f64> = "adjClose" => Number, optional;
        /// Volume.
        volume: Option<i64> = "volume" => Integer, optional;
        /// Unadjusted volume.
        unadjusted_volume: Option<i64> = "unadjustedVolume" => Integer, optional;
        /// Change from the open.
        change: Option<f64> = "change" => Number, optional;
        /// Change in percent.
        change_percent: Option<f64> = "changePercent" => Number, optional;
        /// Volume-weighted average price.
        vwap: Option<f64> = "vwap" => Number, optional;
        /// Display label, e.g. `January 02, 24`.
        label: Option<String> = "label" => Text, optional;
    }
}

impl HistoricalPrice {
    /// High minus low.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmp_core::Record;
    use serde_json::json;

    #[test]
    fn test_full_bar_requires_ohlc() {
        let raw = json!({"symbol": "AAPL", "date": "2024-01-02", "open": 187.15, "high": 188.44, "low": 183.89});
        let errors = HistoricalPrice::SCHEMA.validate(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "close");
    }

    #[test]
    fn test_intraday_bar_datetime() {
        let fields = IntradayBar::SCHEMA
            .validate(&json!({
                "date": "2024-01-02 15:55:00",
                "open": 185.6, "low": 185.5, "high": 185.8, "close": 185.64,
                "volume": 1_234_567.0
            }))
            .unwrap();
        let bar = IntradayBar::from_fields(&IntradayBar::SCHEMA, fields).unwrap();
        assert_eq!(bar.date.to_string(), "2024-01-02 15:55:00");
        assert_eq!(bar.volume, Some(1_234_567));
    }

    #[test]
    fn test_range() {
        let fields = HistoricalPrice::SCHEMA
            .validate(&json!({"date": "2024-01-02", "open": 10, "high": 12.5, "low": 9.5, "close": 11}))
            .unwrap();
        let bar = HistoricalPrice::from_fields(&HistoricalPrice::SCHEMA, fields).unwrap();
        assert_eq!(bar.range(), 3.0);
        assert_eq!(bar.symbol, None);
    }
}
