//! Corporate event calendars.

use chrono::{NaiveDate, NaiveDateTime};

record! {
    /// A dividend, historical or scheduled.
    pub struct Dividend as "dividend" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Ex-dividend date.
        date: NaiveDate = "date" => Date;
        /// Record date.
        record_date: Option<NaiveDate> = "recordDate" => Date, optional;
        /// Payment date.
        payment_date: Option<NaiveDate> = "paymentDate" => Date, optional;
        /// Declaration date.
        declaration_date: Option<NaiveDate> = "declarationDate" => Date, optional;
        /// Split adjusted amount.
        adj_dividend: Option<f64> = "adjDividend" => Number, optional;
        /// Amount per share.
        dividend: f64 = "dividend" => Number;
        /// Yield in percent.
        dividend_yield: Option<f64> = "yield" => Number, optional;
        /// Payment frequency, e.g. `Quarterly`.
        frequency: Option<String> = "frequency" => Text, optional;
    }
}

record! {
    /// An earnings report, past or upcoming.
    pub struct EarningsEvent as "earnings-event" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Report date.
        date: NaiveDate = "date" => Date;
        /// Reported EPS.
        eps_actual: Option<f64> = "epsActual" => Number, optional;
        /// Consensus EPS.
        eps_estimated: Option<f64> = "epsEstimated" => Number, optional;
        /// Reported revenue.
        revenue_actual: Option<f64> = "revenueActual" => Number, optional;
        /// Consensus revenue.
        revenue_estimated: Option<f64> = "revenueEstimated" => Number, optional;
        /// Last update of the entry.
        last_updated: Option<NaiveDate> = "lastUpdated" => Date, optional;
    }
}

impl EarningsEvent {
    /// Reported minus consensus EPS, once both are known.
    #[must_use]
    pub fn eps_surprise(&self) -> Option<f64> {
        Some(self.eps_actual? - self.eps_estimated?)
    }
}

record! {
    /// A stock split.
    pub struct Split as "split" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Effective date.
        date: NaiveDate = "date" => Date;
        /// New shares.
        numerator: f64 = "numerator" => Number;
        /// Old shares.
        denominator: f64 = "denominator" => Number;
    }
}

impl Split {
    /// Shares after the split per share before it.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        (self.denominator != 0.0).then(|| self.numerator / self.denominator)
    }
}

record! {
    /// A scheduled initial public offering.
    pub struct IpoEvent as "ipo-event" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Expected listing date.
        date: NaiveDate = "date" => Date;
        /// Time the entry was recorded.
        daa: Option<NaiveDateTime> = "daa" => DateTime, optional;
        /// Company name.
        company: String = "company" => Text;
        /// Exchange.
        exchange: Option<String> = "exchange" => Text, optional;
        /// Status, e.g. `Expected`.
        actions: Option<String> = "actions" => Text, optional;
        /// Shares offered.
        shares: Option<i64> = "shares" => Integer, optional;
        /// Price range, e.g. `14.00-16.00`.
        price_range: Option<String> = "priceRange" => Text, optional;
        /// Expected market capitalization.
        market_cap: Option<f64> = "marketCap" => Number, optional;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmp_core::Record;
    use serde_json::json;

    #[test]
    fn test_dividend_yield_field() {
        let fields = Dividend::SCHEMA
            .validate(&json!({
                "symbol": "AAPL",
                "date": "2024-11-08",
                "recordDate": "2024-11-11",
                "paymentDate": "",
                "dividend": 0.25,
                "yield": 0.42,
                "frequency": "Quarterly"
            }))
            .unwrap();
        let div = Dividend::from_fields(&Dividend::SCHEMA, fields).unwrap();
        assert_eq!(div.dividend_yield, Some(0.42));
        assert_eq!(div.payment_date, None);
    }

    #[test]
    fn test_eps_surprise() {
        let fields = EarningsEvent::SCHEMA
            .validate(&json!({"symbol": "AAPL", "date": "2025-01-30", "epsActual": 2.4, "epsEstimated": 2.35}))
            .unwrap();
        let event = EarningsEvent::from_fields(&EarningsEvent::SCHEMA, fields).unwrap();
        assert!((event.eps_surprise().unwrap() - 0.05).abs() < 1e-9);

        let upcoming = EarningsEvent::SCHEMA
            .validate(&json!({"symbol": "AAPL", "date": "2025-05-01", "epsActual": null}))
            .unwrap();
        let upcoming = EarningsEvent::from_fields(&EarningsEvent::SCHEMA, upcoming).unwrap();
        assert_eq!(upcoming.eps_surprise(), None);
    }

    #[test]
    fn test_split_ratio() {
        let fields = Split::SCHEMA
            .validate(&json!({"symbol": "NVDA", "date": "2024-06-10", "numerator": 10, "denominator": 1}))
            .unwrap();
        assert_eq!(Split::from_fields(&Split::SCHEMA, fields).unwrap().ratio(), Some(10.0));
    }
}
