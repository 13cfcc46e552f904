//! SEC filings and registrant records.

use chrono::{NaiveDate, NaiveDateTime};

record! {
    /// An SEC filing.
    pub struct SecFiling as "sec-filing" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// SEC Central Index Key.
        cik: String = "cik" => Text;
        /// Filing date.
        filing_date: NaiveDate = "filingDate" => Date;
        /// Acceptance time.
        accepted_date: Option<NaiveDateTime> = "acceptedDate" => DateTime, optional;
        /// Form type, e.g. `10-K`.
        form_type: String = "formType" => Text;
        /// Filing index URL.
        link: String = "link" => Text;
        /// Primary document URL.
        final_link: Option<String> = "finalLink" => Text, optional;
    }
}

record! {
    /// An SEC registrant.
    pub struct SecCompany as "sec-company" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Registrant name.
        name: String = "name" => Text;
        /// SEC Central Index Key.
        cik: String = "cik" => Text;
        /// Standard Industrial Classification code.
        sic_code: Option<String> = "sicCode" => Text, optional;
        /// SIC industry title.
        industry_title: Option<String> = "industryTitle" => Text, optional;
        /// Business address.
        business_address: Option<String> = "businessAddress" => Text, optional;
        /// Phone number.
        phone_number: Option<String> = "phoneNumber" => Text, optional;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmp_core::Record;
    use serde_json::json;

    #[test]
    fn test_filing_date_truncated() {
        let fields = SecFiling::SCHEMA
            .validate(&json!({
                "symbol": "AAPL",
                "cik": "0000320193",
                "filingDate": "2024-11-01 00:00:00",
                "acceptedDate": "2024-11-01 06:01:36",
                "formType": "10-K",
                "link": "https://www.sec.gov/Archives/edgar/data/320193/000032019324000123-index.htm",
                "finalLink": "https://www.sec.gov/Archives/edgar/data/320193/000032019324000123/aapl-20240928.htm"
            }))
            .unwrap();
        let filing = SecFiling::from_fields(&SecFiling::SCHEMA, fields).unwrap();
        assert_eq!(filing.filing_date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(filing.form_type, "10-K");
    }

    #[test]
    fn test_sic_code_numeric() {
        let fields = SecCompany::SCHEMA
            .validate(&json!({"symbol": "AAPL", "name": "Apple Inc.", "cik": "0000320193", "sicCode": 3571}))
            .unwrap();
        let company = SecCompany::from_fields(&SecCompany::SCHEMA, fields).unwrap();
        assert_eq!(company.sic_code.as_deref(), Some("3571"));
    }
}
