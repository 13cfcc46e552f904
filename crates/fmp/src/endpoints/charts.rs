use chrono::NaiveDate;
use fmp_core::{Interval, Params, Result};
use fmp_models::{HistoricalPrice, IntradayBar, LegacyHistoricalPrice, LightPrice};

use crate::{Fmp, Normalized};

fn range(symbol: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Params {
    Params::new()
        .with("symbol", symbol)
        .with_opt("from", from)
        .with_opt("to", to)
}

impl Fmp {
    /// Daily closes and volume.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn historical_prices_light(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<LightPrice>> {
        self.fetch("historical-price-eod/light", &range(symbol, from, to))
            .await
    }

    /// Daily OHLCV bars, newest first as upstream returns them.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<HistoricalPrice>> {
        self.fetch("historical-price-eod/full", &range(symbol, from, to))
            .await
    }

    /// Intraday bars at `interval`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn intraday_chart(
        &self,
        interval: Interval,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<IntradayBar>> {
        let params = range(symbol, from, to).with("interval", interval);
        self.fetch("historical-chart", &params).await
    }

    /// Daily bars from the legacy v3 API, which wraps them in an envelope.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn legacy_historical_prices(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<LegacyHistoricalPrice>> {
        self.fetch("v3/historical-price-full", &range(symbol, from, to))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{Replay, client};

    #[tokio::test]
    async fn test_interval_is_a_path_segment() {
        let body = r#"[{"date":"2024-01-02 09:30:00","open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":100}]"#;
        let transport = Replay::new([(200, body)]);
        let bars = client(transport.clone())
            .intraday_chart(Interval::FiveMinutes, "AAPL", None, None)
            .await
            .unwrap();
        assert_eq!(bars.len(), 1);

        let request = transport.last();
        assert_eq!(
            request.url,
            "https://financialmodelingprep.com/stable/historical-chart/5min"
        );
        assert_eq!(request.query_value("interval"), None);
        assert_eq!(request.query_value("symbol"), Some("AAPL"));
    }

    #[tokio::test]
    async fn test_legacy_prices_use_v3_and_envelope() {
        let body = r#"{"symbol":"AAPL","historical":[{"date":"2024-01-02","open":1.0,"high":2.0,"low":0.5,"close":1.5}]}"#;
        let transport = Replay::new([(200, body)]);
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let prices = client(transport.clone())
            .legacy_historical_prices("AAPL", Some(from), None)
            .await
            .unwrap();
        assert_eq!(prices.records()[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        let request = transport.last();
        assert_eq!(
            request.url,
            "https://financialmodelingprep.com/api/v3/historical-price-full/AAPL"
        );
        assert_eq!(request.query_value("from"), Some("2024-01-01"));
    }
}
