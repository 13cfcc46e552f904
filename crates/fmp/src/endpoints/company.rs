use fmp_core::{Params, Result};
use fmp_models::{
    CompanyProfile, DelistedCompany, EmployeeCount, Executive, MarketCap, ShareFloat, StockPeer,
};

use chrono::NaiveDate;

use crate::{Fmp, Normalized};

impl Fmp {
    /// Company profile of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn profile(&self, symbol: &str) -> Result<Normalized<CompanyProfile>> {
        self.fetch("profile", &Params::new().with("symbol", symbol)).await
    }

    /// Company profile by SEC central index key.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn profile_by_cik(&self, cik: &str) -> Result<Normalized<CompanyProfile>> {
        self.fetch("profile-cik", &Params::new().with("cik", cik)).await
    }

    /// Companies trading in the same sector and size range.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn stock_peers(&self, symbol: &str) -> Result<Normalized<StockPeer>> {
        self.fetch("stock-peers", &Params::new().with("symbol", symbol)).await
    }

    /// Key executives, optionally only those currently active.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn key_executives(
        &self,
        symbol: &str,
        active: Option<bool>,
    ) -> Result<Normalized<Executive>> {
        let params = Params::new().with("symbol", symbol).with_opt("active", active);
        self.fetch("key-executives", &params).await
    }

    /// Current market capitalization.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn market_cap(&self, symbol: &str) -> Result<Normalized<MarketCap>> {
        self.fetch("market-capitalization", &Params::new().with("symbol", symbol))
            .await
    }

    /// Current market capitalization of several symbols in one call.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn market_cap_batch<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<Normalized<MarketCap>> {
        self.fetch("market-capitalization-batch", &Params::new().with("symbols", symbols))
            .await
    }

    /// Daily market capitalization history.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn historical_market_cap(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<u32>,
    ) -> Result<Normalized<MarketCap>> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("limit", limit)
            .with_opt("from", from)
            .with_opt("to", to);
        self.fetch("historical-market-capitalization", &params).await
    }

    /// Free float and outstanding shares.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn shares_float(&self, symbol: &str) -> Result<Normalized<ShareFloat>> {
        self.fetch("shares-float", &Params::new().with("symbol", symbol)).await
    }

    /// One page of delisted companies.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn delisted_companies(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Normalized<DelistedCompany>> {
        let params = Params::new().with_opt("page", page).with_opt("limit", limit);
        self.fetch("delisted-companies", &params).await
    }

    /// Every delisted company, walking pages of `page_size` records.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch_all_pages`].
    pub async fn all_delisted_companies(
        &self,
        page_size: Option<u32>,
    ) -> Result<Normalized<DelistedCompany>> {
        let params = Params::new().with_opt("limit", page_size);
        self.fetch_all_pages("delisted-companies", &params, None).await
    }

    /// Employee counts reported in SEC filings.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn employee_count(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Normalized<EmployeeCount>> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.fetch("employee-count", &params).await
    }
}
