use fmp_core::{Params, Period, Result};
use fmp_models::{BalanceSheet, CashFlowStatement, FinancialRatios, IncomeStatement, KeyMetrics};

use crate::{Fmp, Normalized};

fn statement(symbol: &str, period: Option<Period>, limit: Option<u32>) -> Params {
    Params::new()
        .with("symbol", symbol)
        .with_opt("period", period)
        .with_opt("limit", limit)
}

impl Fmp {
    /// Income statements, newest first.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<Normalized<IncomeStatement>> {
        self.fetch("income-statement", &statement(symbol, period, limit))
            .await
    }

    /// Balance sheets, newest first.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<Normalized<BalanceSheet>> {
        self.fetch("balance-sheet-statement", &statement(symbol, period, limit))
            .await
    }

    /// Cash flow statements, newest first.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn cash_flow_statement(
        &self,
        symbol: &str,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<Normalized<CashFlowStatement>> {
        self.fetch("cash-flow-statement", &statement(symbol, period, limit))
            .await
    }

    /// Key metrics per reporting period.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn key_metrics(
        &self,
        symbol: &str,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<Normalized<KeyMetrics>> {
        self.fetch("key-metrics", &statement(symbol, period, limit)).await
    }

    /// Financial ratios per reporting period.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn ratios(
        &self,
        symbol: &str,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<Normalized<FinancialRatios>> {
        self.fetch("ratios", &statement(symbol, period, limit)).await
    }

    /// The financial report of `symbol` for fiscal `year` as an XLSX
    /// workbook. `period` is `FY` or a quarter such as `Q1`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch_bytes`].
    pub async fn financial_report_xlsx(
        &self,
        symbol: &str,
        year: i32,
        period: &str,
    ) -> Result<Vec<u8>> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("year", i64::from(year))
            .with("period", period);
        self.fetch_bytes("financial-reports-xlsx", &params).await
    }
}
