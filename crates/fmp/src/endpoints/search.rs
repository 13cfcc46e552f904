use fmp_core::{Params, Result};
use fmp_models::{CikMatch, ScreenerResult, SymbolMatch};

use crate::{Fmp, Normalized};

/// Filters for [`Fmp::screener`]. Unset filters are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenerFilter {
    /// Minimum market capitalization.
    pub market_cap_more_than: Option<f64>,
    /// Maximum market capitalization.
    pub market_cap_lower_than: Option<f64>,
    /// Sector, e.g. `Technology`.
    pub sector: Option<String>,
    /// Industry, e.g. `Consumer Electronics`.
    pub industry: Option<String>,
    /// Minimum beta.
    pub beta_more_than: Option<f64>,
    /// Maximum beta.
    pub beta_lower_than: Option<f64>,
    /// Minimum price.
    pub price_more_than: Option<f64>,
    /// Maximum price.
    pub price_lower_than: Option<f64>,
    /// Minimum last annual dividend.
    pub dividend_more_than: Option<f64>,
    /// Maximum last annual dividend.
    pub dividend_lower_than: Option<f64>,
    /// Minimum average volume.
    pub volume_more_than: Option<f64>,
    /// Maximum average volume.
    pub volume_lower_than: Option<f64>,
    /// Exchange short name, e.g. `NASDAQ`.
    pub exchange: Option<String>,
    /// Country code, e.g. `US`.
    pub country: Option<String>,
    /// Only ETFs (`true`) or no ETFs (`false`).
    pub is_etf: Option<bool>,
    /// Only funds (`true`) or no funds (`false`).
    pub is_fund: Option<bool>,
    /// Only actively trading securities.
    pub is_actively_trading: Option<bool>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl ScreenerFilter {
    fn to_params(&self) -> Params {
        Params::new()
            .with_opt("marketCapMoreThan", self.market_cap_more_than)
            .with_opt("marketCapLowerThan", self.market_cap_lower_than)
            .with_opt("sector", self.sector.as_deref())
            .with_opt("industry", self.industry.as_deref())
            .with_opt("betaMoreThan", self.beta_more_than)
            .with_opt("betaLowerThan", self.beta_lower_than)
            .with_opt("priceMoreThan", self.price_more_than)
            .with_opt("priceLowerThan", self.price_lower_than)
            .with_opt("dividendMoreThan", self.dividend_more_than)
            .with_opt("dividendLowerThan", self.dividend_lower_than)
            .with_opt("volumeMoreThan", self.volume_more_than)
            .with_opt("volumeLowerThan", self.volume_lower_than)
            .with_opt("exchange", self.exchange.as_deref())
            .with_opt("country", self.country.as_deref())
            .with_opt("isEtf", self.is_etf)
            .with_opt("isFund", self.is_fund)
            .with_opt("isActivelyTrading", self.is_actively_trading)
            .with_opt("limit", self.limit)
    }
}

impl Fmp {
    /// Search symbols by ticker prefix.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn search_symbol(
        &self,
        query: &str,
        limit: Option<u32>,
        exchange: Option<&str>,
    ) -> Result<Normalized<SymbolMatch>> {
        let params = Params::new()
            .with("query", query)
            .with_opt("limit", limit)
            .with_opt("exchange", exchange);
        self.fetch("search-symbol", &params).await
    }

    /// Search symbols by company name.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn search_name(
        &self,
        query: &str,
        limit: Option<u32>,
        exchange: Option<&str>,
    ) -> Result<Normalized<SymbolMatch>> {
        let params = Params::new()
            .with("query", query)
            .with_opt("limit", limit)
            .with_opt("exchange", exchange);
        self.fetch("search-name", &params).await
    }

    /// Look up companies by SEC central index key.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn search_cik(&self, cik: &str, limit: Option<u32>) -> Result<Normalized<CikMatch>> {
        let params = Params::new().with("cik", cik).with_opt("limit", limit);
        self.fetch("search-cik", &params).await
    }

    /// Screen companies.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn screener(&self, filter: &ScreenerFilter) -> Result<Normalized<ScreenerResult>> {
        self.fetch("company-screener", &filter.to_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{Replay, client};

    #[tokio::test]
    async fn test_unset_arguments_are_not_sent() {
        let transport = Replay::new([(200, r#"[{"symbol":"AAPL","name":"Apple Inc."}]"#)]);
        let matches = client(transport.clone())
            .search_symbol("AAP", Some(5), None)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);

        let request = transport.last();
        assert_eq!(request.query_value("query"), Some("AAP"));
        assert_eq!(request.query_value("limit"), Some("5"));
        assert_eq!(request.query_value("exchange"), None);
    }

    #[tokio::test]
    async fn test_screener_filters() {
        let transport = Replay::new([]);
        let filter = ScreenerFilter {
            sector: Some("Technology".to_string()),
            market_cap_more_than: Some(1.0e12),
            is_etf: Some(false),
            limit: Some(10),
            ..Default::default()
        };
        let results = client(transport.clone()).screener(&filter).await.unwrap();
        assert!(results.is_empty());

        let request = transport.last();
        assert_eq!(request.query_value("sector"), Some("Technology"));
        assert_eq!(request.query_value("isEtf"), Some("false"));
        assert_eq!(request.query_value("limit"), Some("10"));
        assert!(request.query_value("marketCapMoreThan").is_some());
        assert_eq!(request.query_value("industry"), None);
    }
}
