//! Symbol, name, CIK and screener search results.

record! {
    /// A match from symbol or company name search.
    pub struct SymbolMatch as "symbol-match" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Security name.
        name: String = "name" => Text;
        /// Trading currency.
        currency: Option<String> = "currency" => Text, optional;
        /// Full exchange name.
        exchange_full_name: Option<String> = "exchangeFullName" => Text, optional;
        /// Exchange short name.
        exchange: Option<String> = "exchange" => Text, optional;
    }
}

record! {
    /// A match from CIK search.
    pub struct CikMatch as "cik-match" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Company name.
        company_name: String = "companyName" => Text;
        /// SEC Central Index Key.
        cik: String = "cik" => Text;
        /// Full exchange name.
        exchange_full_name: Option<String> = "exchangeFullName" => Text, optional;
        /// Exchange short name.
        exchange: Option<String> = "exchange" => Text, optional;
        /// Trading currency.
        currency: Option<String> = "currency" => Text, optional;
    }
}

record! {
    /// A company returned by the stock screener.
    pub struct ScreenerResult as "screener-result" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Company name.
        company_name: String = "companyName" => Text;
        /// Market capitalization.
        market_cap: Option<f64> = "marketCap" => Number, optional;
        /// Sector.
        sector: Option<String> = "sector" => Text, optional;
        /// Industry.
        industry: Option<String> = "industry" => Text, optional;
        /// Beta.
        beta: Option<f64> = "beta" => Number, optional;
        /// Last price.
        price: f64 = "price" => Number;
        /// Last annual dividend.
        last_annual_dividend: Option<f64> = "lastAnnualDividend" => Number, optional;
        /// Volume.
        volume: Option<i64> = "volume" => Integer, optional;
        /// Full exchange name.
        exchange: Option<String> = "exchange" => Text, optional;
        /// Exchange short name.
        exchange_short_name: Option<String> = "exchangeShortName" => Text, optional;
        /// Country of domicile.
        country: Option<String> = "country" => Text, optional;
        /// Whether the security is an ETF.
        is_etf: Option<bool> = "isEtf" => Flag, optional;
        /// Whether the security is a fund.
        is_fund: Option<bool> = "isFund" => Flag, optional;
        /// Whether the security is actively trading.
        is_actively_trading: Option<bool> = "isActivelyTrading" => Flag, optional;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmp_core::Record;
    use serde_json::json;

    #[test]
    fn test_symbol_match_tolerates_missing_exchange() {
        let fields = SymbolMatch::SCHEMA
            .validate(&json!({"symbol": "AAPL", "name": "Apple Inc.", "currency": "USD"}))
            .unwrap();
        let m = SymbolMatch::from_fields(&SymbolMatch::SCHEMA, fields).unwrap();
        assert_eq!(m.symbol, "AAPL");
        assert_eq!(m.exchange, None);
    }

    #[test]
    fn test_cik_is_text_even_when_numeric() {
        let fields = CikMatch::SCHEMA
            .validate(&json!({"symbol": "AAPL", "companyName": "Apple Inc.", "cik": 320193}))
            .unwrap();
        let m = CikMatch::from_fields(&CikMatch::SCHEMA, fields).unwrap();
        assert_eq!(m.cik, "320193");
    }

    #[test]
    fn test_screener_flags_from_ints() {
        let fields = ScreenerResult::SCHEMA
            .validate(&json!({
                "symbol": "MSFT",
                "companyName": "Microsoft Corporation",
                "marketCap": 3.1e12,
                "price": "415.5",
                "isEtf": 0,
                "isActivelyTrading": true
            }))
            .unwrap();
        let r = ScreenerResult::from_fields(&ScreenerResult::SCHEMA, fields).unwrap();
        assert_eq!(r.price, 415.5);
        assert_eq!(r.is_etf, Some(false));
        assert_eq!(r.is_fund, None);
    }
}
