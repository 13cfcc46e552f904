//! Company reference data.

use chrono::{NaiveDate, NaiveDateTime};

record! {
    /// Company profile.
    ///
    /// Shared by the JSON profile endpoints and the CSV profile bulk export,
    /// which is why every field except the symbol is optional.
    pub struct CompanyProfile as "company-profile" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Last price.
        price: Option<f64> = "price" => Number, optional;
        /// Market capitalization.
        market_cap: Option<f64> = "marketCap" => Number, optional;
        /// Beta.
        beta: Option<f64> = "beta" => Number, optional;
        /// Last dividend.
        last_dividend: Option<f64> = "lastDividend" => Number, optional;
        /// 52 week range, e.g. `164.08-260.1`.
        range: Option<String> = "range" => Text, optional;
        /// Price change.
        change: Option<f64> = "change" => Number, optional;
        /// Price change in percent.
        change_percentage: Option<f64> = "changePercentage" => Number, optional;
        /// Volume.
        volume: Option<i64> = "volume" => Integer, optional;
        /// Average volume.
        average_volume: Option<i64> = "averageVolume" => Integer, optional;
        /// Company name.
        company_name: Option<String> = "companyName" => Text, optional;
        /// Trading currency.
        currency: Option<String> = "currency" => Text, optional;
        /// SEC Central Index Key.
        cik: Option<String> = "cik" => Text, optional;
        /// ISIN.
        isin: Option<String> = "isin" => Text, optional;
        /// CUSIP.
        cusip: Option<String> = "cusip" => Text, optional;
        /// Full exchange name.
        exchange_full_name: Option<String> = "exchangeFullName" => Text, optional;
        /// Exchange short name.
        exchange: Option<String> = "exchange" => Text, optional;
        /// Industry.
        industry: Option<String> = "industry" => Text, optional;
        /// Website.
        website: Option<String> = "website" => Text, optional;
        /// Business description.
        description: Option<String> = "description" => Text, optional;
        /// Chief executive.
        ceo: Option<String> = "ceo" => Text, optional;
        /// Sector.
        sector: Option<String> = "sector" => Text, optional;
        /// Country of domicile.
        country: Option<String> = "country" => Text, optional;
        /// Full-time employees.
        full_time_employees: Option<i64> = "fullTimeEmployees" => Integer, optional;
        /// Phone.
        phone: Option<String> = "phone" => Text, optional;
        /// Street address.
        address: Option<String> = "address" => Text, optional;
        /// City.
        city: Option<String> = "city" => Text, optional;
        /// State.
        state: Option<String> = "state" => Text, optional;
        /// Postal code.
        zip: Option<String> = "zip" => Text, optional;
        /// Logo URL.
        image: Option<String> = "image" => Text, optional;
        /// IPO date.
        ipo_date: Option<NaiveDate> = "ipoDate" => Date, optional;
        /// Whether the logo is a placeholder.
        default_image: Option<bool> = "defaultImage" => Flag, optional;
        /// Whether the security is an ETF.
        is_etf: Option<bool> = "isEtf" => Flag, optional;
        /// Whether the security is actively trading.
        is_actively_trading: Option<bool> = "isActivelyTrading" => Flag, optional;
        /// Whether the security is an ADR.
        is_adr: Option<bool> = "isAdr" => Flag, optional;
        /// Whether the security is a fund.
        is_fund: Option<bool> = "isFund" => Flag, optional;
    }
}

record! {
    /// A peer company.
    pub struct StockPeer as "stock-peer" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Company name.
        company_name: Option<String> = "companyName" => Text, optional;
        /// Last price.
        price: Option<f64> = "price" => Number, optional;
        /// Market capitalization.
        market_cap: Option<f64> = "mktCap" => Number, optional;
    }
}

record! {
    /// A key executive.
    pub struct Executive as "key-executive" {
        /// Title.
        title: String = "title" => Text;
        /// Name.
        name: String = "name" => Text;
        /// Total pay.
        pay: Option<f64> = "pay" => Number, optional;
        /// Currency of `pay`.
        currency_pay: Option<String> = "currencyPay" => Text, optional;
        /// Gender.
        gender: Option<String> = "gender" => Text, optional;
        /// Year of birth.
        year_born: Option<i64> = "yearBorn" => Integer, optional;
        /// Whether the executive is active.
        active: Option<bool> = "active" => Flag, optional;
    }
}

record! {
    /// Market capitalization on a date.
    pub struct MarketCap as "market-cap" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Observation date.
        date: NaiveDate = "date" => Date;
        /// Market capitalization.
        market_cap: f64 = "marketCap" => Number;
    }
}

record! {
    /// Free float and share counts.
    pub struct ShareFloat as "share-float" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Observation time.
        date: Option<NaiveDateTime> = "date" => DateTime, optional;
        /// Free float in percent.
        free_float: f64 = "freeFloat" => Number;
        /// Floating shares.
        float_shares: Option<i64> = "floatShares" => Integer, optional;
        /// Outstanding shares.
        outstanding_shares: Option<i64> = "outstandingShares" => Integer, optional;
    }
}

record! {
    /// A delisted company.
    pub struct DelistedCompany as "delisted-company" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Company name.
        company_name: String = "companyName" => Text;
        /// Exchange.
        exchange: Option<String> = "exchange" => Text, optional;
        /// IPO date.
        ipo_date: Option<NaiveDate> = "ipoDate" => Date, optional;
        /// Delisting date.
        delisted_date: NaiveDate = "delistedDate" => Date;
    }
}

record! {
    /// Employee count reported in an SEC filing.
    pub struct EmployeeCount as "employee-count" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// SEC Central Index Key.
        cik: Option<String> = "cik" => Text, optional;
        /// Time the filing was accepted.
        acceptance_time: Option<NaiveDateTime> = "acceptanceTime" => DateTime, optional;
        /// End of the reporting period.
        period_of_report: Option<NaiveDate> = "periodOfReport" => Date, optional;
        /// Company name.
        company_name: Option<String> = "companyName" => Text, optional;
        /// SEC form type.
        form_type: Option<String> = "formType" => Text, optional;
        /// Filing date.
        filing_date: NaiveDate = "filingDate" => Date;
        /// Employee count.
        employee_count: i64 = "employeeCount" => Integer;
        /// Filing URL.
        source: Option<String> = "source" => Text, optional;
    }
}
