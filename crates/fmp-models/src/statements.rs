//! Financial statements and derived metrics.
//!
//! Line items are `f64` and optional: smaller filers leave many of them empty
//! and upstream sends `null` rather than omitting the key.

use chrono::{NaiveDate, NaiveDateTime};

record! {
    /// Income statement for one fiscal period.
    pub struct IncomeStatement as "income-statement" {
        /// Period end date.
        date: NaiveDate = "date" => Date;
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Reporting currency.
        reported_currency: Option<String> = "reportedCurrency" => Text, optional;
        /// SEC Central Index Key.
        cik: Option<String> = "cik" => Text, optional;
        /// Filing date.
        filing_date: Option<NaiveDate> = "filingDate" => Date, optional;
        /// Acceptance time.
        accepted_date: Option<NaiveDateTime> = "acceptedDate" => DateTime, optional;
        /// Fiscal year.
        fiscal_year: Option<String> = "fiscalYear" => Text, optional;
        /// Fiscal period, `FY` or `Q1`..`Q4`.
        period: String = "period" => Text;
        /// Total revenue.
        revenue: f64 = "revenue" => Number;
        /// Cost of revenue.
        cost_of_revenue: Option<f64> = "costOfRevenue" => Number, optional;
        /// Gross profit.
        gross_profit: Option<f64> = "grossProfit" => Number, optional;
        /// Research and development.
        research_and_development_expenses: Option<f64> = "researchAndDevelopmentExpenses" => Number, optional;
        /// Selling, general and administrative.
        selling_general_and_administrative_expenses: Option<f64> = "sellingGeneralAndAdministrativeExpenses" => Number, optional;
        /// Operating expenses.
        operating_expenses: Option<f64> = "operatingExpenses" => Number, optional;
        /// Operating income.
        operating_income: Option<f64> = "operatingIncome" => Number, optional;
        /// Interest expense.
        interest_expense: Option<f64> = "interestExpense" => Number, optional;
        /// EBITDA.
        ebitda: Option<f64> = "ebitda" => Number, optional;
        /// EBIT.
        ebit: Option<f64> = "ebit" => Number, optional;
        /// Pre-tax income.
        income_before_tax: Option<f64> = "incomeBeforeTax" => Number, optional;
        /// Income tax expense.
        income_tax_expense: Option<f64> = "incomeTaxExpense" => Number, optional;
        /// Net income.
        net_income: f64 = "netIncome" => Number;
        /// Basic EPS.
        eps: Option<f64> = "eps" => Number, optional;
        /// Diluted EPS.
        eps_diluted: Option<f64> = "epsDiluted" => Number, optional;
        /// Weighted average basic shares.
        weighted_average_shs_out: Option<f64> = "weightedAverageShsOut" => Number, optional;
        /// Weighted average diluted shares.
        weighted_average_shs_out_dil: Option<f64> = "weightedAverageShsOutDil" => Number, optional;
    }
}

impl IncomeStatement {
    /// Gross profit over revenue.
    #[must_use]
    pub fn gross_margin(&self) -> Option<f64> {
        let gross = self.gross_profit?;
        (self.revenue > 0.0).then(|| gross / self.revenue)
    }

    /// Net income over revenue.
    #[must_use]
    pub fn net_margin(&self) -> Option<f64> {
        (self.revenue > 0.0).then(|| self.net_income / self.revenue)
    }
}

record! {
    /// Balance sheet at a period end.
    pub struct BalanceSheet as "balance-sheet" {
        /// Period end date.
        date: NaiveDate = "date" => Date;
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Reporting currency.
        reported_currency: Option<String> = "reportedCurrency" => Text, optional;
        /// SEC Central Index Key.
        cik: Option<String> = "cik" => Text, optional;
        /// Filing date.
        filing_date: Option<NaiveDate> = "filingDate" => Date, optional;
        /// Acceptance time.
        accepted_date: Option<NaiveDateTime> = "acceptedDate" => DateTime, optional;
        /// Fiscal year.
        fiscal_year: Option<String> = "fiscalYear" => Text, optional;
        /// Fiscal period.
        period: String = "period" => Text;
        /// Cash and equivalents.
        cash_and_cash_equivalents: Option<f64> = "cashAndCashEquivalents" => Number, optional;
        /// Short-term investments.
        short_term_investments: Option<f64> = "shortTermInvestments" => Number, optional;
        /// Net receivables.
        net_receivables: Option<f64> = "netReceivables" => Number, optional;
        /// Inventory.
        inventory: Option<f64> = "inventory" => Number, optional;
        /// Total current assets.
        total_current_assets: Option<f64> = "totalCurrentAssets" => Number, optional;
        /// Net property, plant and equipment.
        property_plant_equipment_net: Option<f64> = "propertyPlantEquipmentNet" => Number, optional;
        /// Goodwill.
        goodwill: Option<f64> = "goodwill" => Number, optional;
        /// Intangible assets.
        intangible_assets: Option<f64> = "intangibleAssets" => Number, optional;
        /// Total assets.
        total_assets: f64 = "totalAssets" => Number;
        /// Accounts payable.
        account_payables: Option<f64> = "accountPayables" => Number, optional;
        /// Short-term debt.
        short_term_debt: Option<f64> = "shortTermDebt" => Number, optional;
        /// Total current liabilities.
        total_current_liabilities: Option<f64> = "totalCurrentLiabilities" => Number, optional;
        /// Long-term debt.
        long_term_debt: Option<f64> = "longTermDebt" => Number, optional;
        /// Total liabilities.
        total_liabilities: Option<f64> = "totalLiabilities" => Number, optional;
        /// Retained earnings.
        retained_earnings: Option<f64> = "retainedEarnings" => Number, optional;
        /// Stockholders' equity.
        total_stockholders_equity: Option<f64> = "totalStockholdersEquity" => Number, optional;
        /// Total equity including minority interest.
        total_equity: Option<f64> = "totalEquity" => Number, optional;
        /// Total debt.
        total_debt: Option<f64> = "totalDebt" => Number, optional;
        /// Debt net of cash.
        net_debt: Option<f64> = "netDebt" => Number, optional;
    }
}

record! {
    /// Cash flow statement for one fiscal period.
    pub struct CashFlowStatement as "cash-flow-statement" {
        /// Period end date.
        date: NaiveDate = "date" => Date;
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Reporting currency.
        reported_currency: Option<String> = "reportedCurrency" => Text, optional;
        /// SEC Central Index Key.
        cik: Option<String> = "cik" => Text, optional;
        /// Filing date.
        filing_date: Option<NaiveDate> = "filingDate" => Date, optional;
        /// Acceptance time.
        accepted_date: Option<NaiveDateTime> = "acceptedDate" => DateTime, optional;
        /// Fiscal year.
        fiscal_year: Option<String> = "fiscalYear" => Text, optional;
        /// Fiscal period.
        period: String = "period" => Text;
        /// Net income.
        net_income: Option<f64> = "netIncome" => Number, optional;
        /// Depreciation and amortization.
        depreciation_and_amortization: Option<f64> = "depreciationAndAmortization" => Number, optional;
        /// Stock-based compensation.
        stock_based_compensation: Option<f64> = "stockBasedCompensation" => Number, optional;
        /// Change in working capital.
        change_in_working_capital: Option<f64> = "changeInWorkingCapital" => Number, optional;
        /// Cash from operations.
        net_cash_provided_by_operating_activities: Option<f64> = "netCashProvidedByOperatingActivities" => Number, optional;
        /// Purchases of property, plant and equipment.
        investments_in_property_plant_and_equipment: Option<f64> = "investmentsInPropertyPlantAndEquipment" => Number, optional;
        /// Acquisitions, net.
        acquisitions_net: Option<f64> = "acquisitionsNet" => Number, optional;
        /// Cash from investing.
        net_cash_provided_by_investing_activities: Option<f64> = "netCashProvidedByInvestingActivities" => Number, optional;
        /// Net debt issuance.
        net_debt_issuance: Option<f64> = "netDebtIssuance" => Number, optional;
        /// Buybacks.
        common_stock_repurchased: Option<f64> = "commonStockRepurchased" => Number, optional;
        /// Dividends paid.
        net_dividends_paid: Option<f64> = "netDividendsPaid" => Number, optional;
        /// Cash from financing.
        net_cash_provided_by_financing_activities: Option<f64> = "netCashProvidedByFinancingActivities" => Number, optional;
        /// Net change in cash.
        net_change_in_cash: Option<f64> = "netChangeInCash" => Number, optional;
        /// Operating cash flow.
        operating_cash_flow: Option<f64> = "operatingCashFlow" => Number, optional;
        /// Capital expenditure, negative.
        capital_expenditure: Option<f64> = "capitalExpenditure" => Number, optional;
        /// Free cash flow.
        free_cash_flow: Option<f64> = "freeCashFlow" => Number, optional;
    }
}

record! {
    /// Valuation and efficiency metrics for one fiscal period.
    pub struct KeyMetrics as "key-metrics" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Period end date.
        date: NaiveDate = "date" => Date;
        /// Fiscal year.
        fiscal_year: Option<String> = "fiscalYear" => Text, optional;
        /// Fiscal period.
        period: String = "period" => Text;
        /// Reporting currency.
        reported_currency: Option<String> = "reportedCurrency" => Text, optional;
        /// Market capitalization.
        market_cap: Option<f64> = "marketCap" => Number, optional;
        /// Enterprise value.
        enterprise_value: Option<f64> = "enterpriseValue" => Number, optional;
        /// EV / sales.
        ev_to_sales: Option<f64> = "evToSales" => Number, optional;
        /// EV / EBITDA.
        ev_to_ebitda: Option<f64> = "evToEBITDA" => Number, optional;
        /// Net debt / EBITDA.
        net_debt_to_ebitda: Option<f64> = "netDebtToEBITDA" => Number, optional;
        /// Current ratio.
        current_ratio: Option<f64> = "currentRatio" => Number, optional;
        /// Return on assets.
        return_on_assets: Option<f64> = "returnOnAssets" => Number, optional;
        /// Return on equity.
        return_on_equity: Option<f64> = "returnOnEquity" => Number, optional;
        /// Return on invested capital.
        return_on_invested_capital: Option<f64> = "returnOnInvestedCapital" => Number, optional;
        /// Earnings yield.
        earnings_yield: Option<f64> = "earningsYield" => Number, optional;
        /// Free cash flow yield.
        free_cash_flow_yield: Option<f64> = "freeCashFlowYield" => Number, optional;
        /// Working capital.
        working_capital: Option<f64> = "workingCapital" => Number, optional;
        /// Invested capital.
        invested_capital: Option<f64> = "investedCapital" => Number, optional;
    }
}

record! {
    /// Financial ratios for one fiscal period.
    pub struct FinancialRatios as "ratios" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Period end date.
        date: NaiveDate = "date" => Date;
        /// Fiscal year.
        fiscal_year: Option<String> = "fiscalYear" => Text, optional;
        /// Fiscal period.
        period: String = "period" => Text;
        /// Reporting currency.
        reported_currency: Option<String> = "reportedCurrency" => Text, optional;
        /// Gross margin.
        gross_profit_margin: Option<f64> = "grossProfitMargin" => Number, optional;
        /// Operating margin.
        operating_profit_margin: Option<f64> = "operatingProfitMargin" => Number, optional;
        /// Net margin.
        net_profit_margin: Option<f64> = "netProfitMargin" => Number, optional;
        /// Current ratio.
        current_ratio: Option<f64> = "currentRatio" => Number, optional;
        /// Quick ratio.
        quick_ratio: Option<f64> = "quickRatio" => Number, optional;
        /// P/E.
        price_to_earnings_ratio: Option<f64> = "priceToEarningsRatio" => Number, optional;
        /// P/B.
        price_to_book_ratio: Option<f64> = "priceToBookRatio" => Number, optional;
        /// P/S.
        price_to_sales_ratio: Option<f64> = "priceToSalesRatio" => Number, optional;
        /// Debt / equity.
        debt_to_equity_ratio: Option<f64> = "debtToEquityRatio" => Number, optional;
        /// Dividend yield.
        dividend_yield: Option<f64> = "dividendYield" => Number, optional;
        /// Dividend payout ratio.
        dividend_payout_ratio: Option<f64> = "dividendPayoutRatio" => Number, optional;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmp_core::Record;
    use serde_json::json;

    fn income_json() -> serde_json::Value {
        json!({
            "date": "2024-09-28",
            "symbol": "AAPL",
            "reportedCurrency": "USD",
            "cik": "0000320193",
            "filingDate": "2024-11-01",
            "acceptedDate": "2024-11-01 06:01:36",
            "fiscalYear": 2024,
            "period": "FY",
            "revenue": 391035000000_i64,
            "grossProfit": 180683000000_i64,
            "netIncome": 93736000000_i64,
            "eps": 6.11,
            "ebitda": null
        })
    }

    #[test]
    fn test_income_statement() {
        let fields = IncomeStatement::SCHEMA.validate(&income_json()).unwrap();
        let stmt = IncomeStatement::from_fields(&IncomeStatement::SCHEMA, fields).unwrap();
        assert_eq!(stmt.fiscal_year.as_deref(), Some("2024"));
        assert_eq!(stmt.ebitda, None);
        assert!((stmt.gross_margin().unwrap() - 0.462).abs() < 1e-3);
        assert!(stmt.net_margin().unwrap() > 0.23);
        assert_eq!(
            stmt.accepted_date.map(|d| d.date()),
            NaiveDate::from_ymd_opt(2024, 11, 1)
        );
    }

    #[test]
    fn test_statement_schemas_are_distinct() {
        // An income statement has no totalAssets, so it never passes as a balance sheet.
        assert!(!BalanceSheet::SCHEMA.accepts(&income_json()));
        assert!(!BalanceSheet::supports(&IncomeStatement::SCHEMA));
    }

    #[test]
    fn test_ratios_all_optional() {
        let fields = FinancialRatios::SCHEMA
            .validate(&json!({"symbol": "AAPL", "date": "2024-09-28", "period": "FY", "quickRatio": "0.79"}))
            .unwrap();
        let ratios = FinancialRatios::from_fields(&FinancialRatios::SCHEMA, fields).unwrap();
        assert_eq!(ratios.quick_ratio, Some(0.79));
        assert_eq!(ratios.dividend_yield, None);
    }
}
