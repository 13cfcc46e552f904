use chrono::NaiveDate;
use fmp_core::{Params, Result};
use fmp_models::{SecCompany, SecFiling};

use crate::{Fmp, Normalized};

impl Fmp {
    /// One page of SEC filings of `symbol` filed between `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn sec_filings(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Normalized<SecFiling>> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("from", from)
            .with("to", to)
            .with_opt("page", page)
            .with_opt("limit", limit);
        self.fetch("sec-filings-search/symbol", &params).await
    }

    /// Every SEC filing of `symbol` between `from` and `to`, walking pages of
    /// `page_size` records.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch_all_pages`].
    pub async fn all_sec_filings(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
        page_size: Option<u32>,
    ) -> Result<Normalized<SecFiling>> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("from", from)
            .with("to", to)
            .with_opt("limit", page_size);
        self.fetch_all_pages("sec-filings-search/symbol", &params, None)
            .await
    }

    /// SEC registrant details of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn sec_company(&self, symbol: &str) -> Result<Normalized<SecCompany>> {
        self.fetch("sec-filings-company-search/symbol", &Params::new().with("symbol", symbol))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{Replay, client};

    fn filing(form: &str) -> String {
        format!(
            r#"{{"symbol":"AAPL","cik":"0000320193","filingDate":"2024-11-01","acceptedDate":"2024-11-01 06:01:36","formType":"{form}","link":"https://www.sec.gov/x"}}"#
        )
    }

    #[tokio::test]
    async fn test_all_filings_stop_after_short_page() {
        let full = format!("[{},{}]", filing("10-K"), filing("8-K"));
        let short = format!("[{}]", filing("4"));
        let transport = Replay::new([(200, full.as_str()), (200, short.as_str())]);
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let filings = client(transport.clone())
            .all_sec_filings("AAPL", from, to, Some(2))
            .await
            .unwrap();

        let forms: Vec<_> = filings.records().iter().map(|f| f.form_type.as_str()).collect();
        assert_eq!(forms, vec!["10-K", "8-K", "4"]);
        let pages: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| r.query_value("page").map(str::to_string))
            .collect();
        assert_eq!(pages, vec![Some("0".to_string()), Some("1".to_string())]);
    }

    #[tokio::test]
    async fn test_date_range_is_required() {
        let transport = Replay::new([]);
        let err = client(transport.clone())
            .fetch::<SecFiling>("sec-filings-search/symbol", &Params::new().with("symbol", "AAPL"))
            .await
            .unwrap_err();
        assert!(matches!(err, fmp_core::FmpError::InvalidParameter(_)));
        assert!(transport.requests().is_empty());
    }
}
