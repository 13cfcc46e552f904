use chrono::NaiveDate;
use fmp_core::{Params, Result};
use fmp_models::{Dividend, EarningsEvent, IpoEvent, Split};

use crate::{Fmp, Normalized};

fn window(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Params {
    Params::new().with_opt("from", from).with_opt("to", to)
}

impl Fmp {
    /// Dividend history of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn dividends(&self, symbol: &str, limit: Option<u32>) -> Result<Normalized<Dividend>> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.fetch("dividends", &params).await
    }

    /// Dividends of all companies in a date window.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn dividends_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<Dividend>> {
        self.fetch("dividends-calendar", &window(from, to)).await
    }

    /// Earnings announcements in a date window.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn earnings_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<EarningsEvent>> {
        self.fetch("earnings-calendar", &window(from, to)).await
    }

    /// Split history of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn splits(&self, symbol: &str, limit: Option<u32>) -> Result<Normalized<Split>> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.fetch("splits", &params).await
    }

    /// Splits of all companies in a date window.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn splits_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<Split>> {
        self.fetch("splits-calendar", &window(from, to)).await
    }

    /// Upcoming and recent IPOs.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn ipo_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Normalized<IpoEvent>> {
        self.fetch("ipos-calendar", &window(from, to)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{Replay, client};

    #[tokio::test]
    async fn test_calendar_window() {
        let body = r#"[
            {"symbol":"AAPL","date":"2024-06-10","numerator":4,"denominator":1},
            {"symbol":"NVDA","date":"2024-06-10","numerator":"10","denominator":"1"}
        ]"#;
        let transport = Replay::new([(200, body)]);
        let from = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let splits = client(transport.clone())
            .splits_calendar(Some(from), Some(to))
            .await
            .unwrap();

        assert_eq!(splits.len(), 2);
        assert_eq!(splits.records()[1].numerator, 10.0);
        let request = transport.last();
        assert_eq!(request.query_value("from"), Some("2024-06-01"));
        assert_eq!(request.query_value("to"), Some("2024-06-30"));
    }

    #[tokio::test]
    async fn test_ipo_recorded_time_with_utc_offset() {
        let body = r#"[{
            "symbol": "NEWCO",
            "date": "2025-02-03",
            "daa": "2025-02-03T05:00:00.000Z",
            "company": "NewCo Inc.",
            "exchange": "NASDAQ",
            "actions": "Expected",
            "shares": null,
            "priceRange": null,
            "marketCap": null
        }]"#;
        let ipos = client(Replay::new([(200, body)]))
            .ipo_calendar(None, None)
            .await
            .unwrap();

        assert!(ipos.is_complete(), "{:?}", ipos.mismatches());
        let daa = ipos.records()[0].daa.unwrap();
        assert_eq!(daa.to_string(), "2025-02-03 05:00:00");
    }
}
