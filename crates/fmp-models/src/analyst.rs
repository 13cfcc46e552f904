//! Fundamental ratings.
//!
//! The latest snapshot and the historical series are different shapes: only
//! historical entries carry a date.

use chrono::NaiveDate;

record! {
    /// Latest fundamental rating.
    pub struct RatingSnapshot as "rating-snapshot" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Letter rating, e.g. `A-`.
        rating: String = "rating" => Text;
        /// Overall score, 1 to 5.
        overall_score: i64 = "overallScore" => Integer;
        /// Discounted cash flow score.
        discounted_cash_flow_score: Option<i64> = "discountedCashFlowScore" => Integer, optional;
        /// Return on equity score.
        return_on_equity_score: Option<i64> = "returnOnEquityScore" => Integer, optional;
        /// Return on assets score.
        return_on_assets_score: Option<i64> = "returnOnAssetsScore" => Integer, optional;
        /// Debt to equity score.
        debt_to_equity_score: Option<i64> = "debtToEquityScore" => Integer, optional;
        /// Price to earnings score.
        price_to_earnings_score: Option<i64> = "priceToEarningsScore" => Integer, optional;
        /// Price to book score.
        price_to_book_score: Option<i64> = "priceToBookScore" => Integer, optional;
    }
}

record! {
    /// Fundamental rating on a past date.
    pub struct HistoricalRating as "rating-historical" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Rating date.
        date: NaiveDate = "date" => Date;
        /// Letter rating.
        rating: String = "rating" => Text;
        /// Overall score, 1 to 5.
        overall_score: i64 = "overallScore" => Integer;
        /// Discounted cash flow score.
        discounted_cash_flow_score: Option<i64> = "discountedCashFlowScore" => Integer, optional;
        /// Return on equity score.
        return_on_equity_score: Option<i64> = "returnOnEquityScore" => Integer, optional;
        /// Return on assets score.
        return_on_assets_score: Option<i64> = "returnOnAssetsScore" => Integer, optional;
        /// Debt to equity score.
        debt_to_equity_score: Option<i64> = "debtToEquityScore" => Integer, optional;
        /// Price to earnings score.
        price_to_earnings_score: Option<i64> = "priceToEarningsScore" => Integer, optional;
        /// Price to book score.
        price_to_book_score: Option<i64> = "priceToBookScore" => Integer, optional;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_and_history_differ_by_date() {
        let snapshot = json!({"symbol": "AAPL", "rating": "A-", "overallScore": 4});
        let historical = json!({"symbol": "AAPL", "date": "2025-02-04", "rating": "A-", "overallScore": 4});
        assert!(RatingSnapshot::SCHEMA.accepts(&snapshot));
        assert!(!HistoricalRating::SCHEMA.accepts(&snapshot));
        assert!(HistoricalRating::SCHEMA.accepts(&historical));
        assert_ne!(RatingSnapshot::SCHEMA.name, HistoricalRating::SCHEMA.name);
    }
}
