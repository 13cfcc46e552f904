//! The endpoint catalog.
//!
//! Every endpoint the client can call, with its parameter contract and the
//! schemas its records may follow. The catalog is plain `'static` data and is
//! indexed once by [`Registry`](crate::Registry).

use fmp_core::{ApiVersion, Endpoint, Pagination, ParamKind, ParamSpec, SchemaRule};
use fmp_models::quote::{is_commodity_quote, is_currency_quote, is_index_quote};
use fmp_models::{
    AftermarketQuote, BalanceSheet, CashFlowStatement, CikMatch, CommodityQuote, CompanyProfile,
    Cryptocurrency, CurrencyQuote, DelistedCompany, Dividend, EarningsEvent, EmployeeCount,
    EquityQuote, Exchange, Executive, FinancialRatios, ForexPair, HistoricalPrice, HistoricalRating,
    IncomeStatement, IndexQuote, IntradayBar, IpoEvent, KeyMetrics, LegacyHistoricalPrice,
    LightPrice, ListedSymbol, MarketCap, PriceChange, RatingSnapshot, ScreenerResult, SecCompany,
    SecFiling, Sector, ShareFloat, ShortQuote, Split, StockPeer, SymbolMatch,
};

const SYMBOL: ParamSpec = ParamSpec::query("symbol", ParamKind::Text).required();
const SYMBOLS: ParamSpec = ParamSpec::query("symbols", ParamKind::List).required();
const QUERY: ParamSpec = ParamSpec::query("query", ParamKind::Text).required();
const CIK: ParamSpec = ParamSpec::query("cik", ParamKind::Text).required();
const LIMIT: ParamSpec = ParamSpec::query("limit", ParamKind::Integer);
const PAGE: ParamSpec = ParamSpec::query("page", ParamKind::Integer);
const EXCHANGE: ParamSpec = ParamSpec::query("exchange", ParamKind::Text);
const FROM: ParamSpec = ParamSpec::query("from", ParamKind::Date);
const TO: ParamSpec = ParamSpec::query("to", ParamKind::Date);
const PERIOD: ParamSpec = ParamSpec::query("period", ParamKind::Text);

const SEARCH: &[ParamSpec] = &[QUERY, LIMIT, EXCHANGE];
const SYMBOL_ONLY: &[ParamSpec] = &[SYMBOL];
const SYMBOL_LIMIT: &[ParamSpec] = &[SYMBOL, LIMIT];
const DATE_RANGE: &[ParamSpec] = &[FROM, TO];
const SYMBOL_RANGE: &[ParamSpec] = &[SYMBOL, FROM, TO];
const STATEMENT: &[ParamSpec] = &[SYMBOL, PERIOD, LIMIT];

const PAGED: Pagination = Pagination::new("page").sized_by("limit");

/// Quote shapes in priority order. Equity is the fallback.
const QUOTE_RULES: &[SchemaRule] = &[
    SchemaRule::when(&IndexQuote::SCHEMA, is_index_quote),
    SchemaRule::when(&CurrencyQuote::SCHEMA, is_currency_quote),
    SchemaRule::when(&CommodityQuote::SCHEMA, is_commodity_quote),
    SchemaRule::always(&EquityQuote::SCHEMA),
];

/// All endpoints known to the client.
pub static CATALOG: &[Endpoint] = &[
    // Search
    Endpoint::new("search-symbol", "search-symbol", &[SchemaRule::always(&SymbolMatch::SCHEMA)])
        .params(SEARCH),
    Endpoint::new("search-name", "search-name", &[SchemaRule::always(&SymbolMatch::SCHEMA)])
        .params(SEARCH),
    Endpoint::new("search-cik", "search-cik", &[SchemaRule::always(&CikMatch::SCHEMA)])
        .params(&[CIK, LIMIT]),
    Endpoint::new(
        "company-screener",
        "company-screener",
        &[SchemaRule::always(&ScreenerResult::SCHEMA)],
    )
    .params(&[
        ParamSpec::query("marketCapMoreThan", ParamKind::Number),
        ParamSpec::query("marketCapLowerThan", ParamKind::Number),
        ParamSpec::query("sector", ParamKind::Text),
        ParamSpec::query("industry", ParamKind::Text),
        ParamSpec::query("betaMoreThan", ParamKind::Number),
        ParamSpec::query("betaLowerThan", ParamKind::Number),
        ParamSpec::query("priceMoreThan", ParamKind::Number),
        ParamSpec::query("priceLowerThan", ParamKind::Number),
        ParamSpec::query("dividendMoreThan", ParamKind::Number),
        ParamSpec::query("dividendLowerThan", ParamKind::Number),
        ParamSpec::query("volumeMoreThan", ParamKind::Number),
        ParamSpec::query("volumeLowerThan", ParamKind::Number),
        EXCHANGE,
        ParamSpec::query("country", ParamKind::Text),
        ParamSpec::query("isEtf", ParamKind::Flag),
        ParamSpec::query("isFund", ParamKind::Flag),
        ParamSpec::query("isActivelyTrading", ParamKind::Flag),
        LIMIT,
    ]),
    // Directory
    Endpoint::new("stock-list", "stock-list", &[SchemaRule::always(&ListedSymbol::SCHEMA)]),
    Endpoint::new(
        "available-exchanges",
        "available-exchanges",
        &[SchemaRule::always(&Exchange::SCHEMA)],
    ),
    Endpoint::new("available-sectors", "available-sectors", &[SchemaRule::always(&Sector::SCHEMA)]),
    Endpoint::new("forex-list", "forex-list", &[SchemaRule::always(&ForexPair::SCHEMA)]),
    Endpoint::new(
        "cryptocurrency-list",
        "cryptocurrency-list",
        &[SchemaRule::always(&Cryptocurrency::SCHEMA)],
    ),
    // Company
    Endpoint::new("profile", "profile", &[SchemaRule::always(&CompanyProfile::SCHEMA)])
        .params(SYMBOL_ONLY)
        .single(),
    Endpoint::new("profile-cik", "profile-cik", &[SchemaRule::always(&CompanyProfile::SCHEMA)])
        .params(&[CIK])
        .single(),
    Endpoint::new("stock-peers", "stock-peers", &[SchemaRule::always(&StockPeer::SCHEMA)])
        .params(SYMBOL_ONLY),
    Endpoint::new("key-executives", "key-executives", &[SchemaRule::always(&Executive::SCHEMA)])
        .params(&[SYMBOL, ParamSpec::query("active", ParamKind::Flag)]),
    Endpoint::new(
        "market-capitalization",
        "market-capitalization",
        &[SchemaRule::always(&MarketCap::SCHEMA)],
    )
    .params(SYMBOL_ONLY)
    .single(),
    Endpoint::new(
        "market-capitalization-batch",
        "market-capitalization-batch",
        &[SchemaRule::always(&MarketCap::SCHEMA)],
    )
    .params(&[SYMBOLS]),
    Endpoint::new(
        "historical-market-capitalization",
        "historical-market-capitalization",
        &[SchemaRule::always(&MarketCap::SCHEMA)],
    )
    .params(&[SYMBOL, LIMIT, FROM, TO]),
    Endpoint::new("shares-float", "shares-float", &[SchemaRule::always(&ShareFloat::SCHEMA)])
        .params(SYMBOL_ONLY)
        .single(),
    Endpoint::new(
        "delisted-companies",
        "delisted-companies",
        &[SchemaRule::always(&DelistedCompany::SCHEMA)],
    )
    .params(&[PAGE, LIMIT])
    .paginated(PAGED),
    Endpoint::new("employee-count", "employee-count", &[SchemaRule::always(&EmployeeCount::SCHEMA)])
        .params(SYMBOL_LIMIT),
    // Quotes
    Endpoint::new("quote", "quote", QUOTE_RULES)
        .params(SYMBOL_ONLY)
        .single(),
    Endpoint::new("batch-quote", "batch-quote", QUOTE_RULES).params(&[SYMBOLS]),
    Endpoint::new("quote-short", "quote-short", &[SchemaRule::always(&ShortQuote::SCHEMA)])
        .params(SYMBOL_ONLY),
    Endpoint::new(
        "aftermarket-quote",
        "aftermarket-quote",
        &[SchemaRule::always(&AftermarketQuote::SCHEMA)],
    )
    .params(SYMBOL_ONLY),
    Endpoint::new(
        "stock-price-change",
        "stock-price-change",
        &[SchemaRule::always(&PriceChange::SCHEMA)],
    )
    .params(SYMBOL_ONLY),
    // Charts
    Endpoint::new(
        "historical-price-eod/light",
        "historical-price-eod/light",
        &[SchemaRule::always(&LightPrice::SCHEMA)],
    )
    .params(SYMBOL_RANGE),
    Endpoint::new(
        "historical-price-eod/full",
        "historical-price-eod/full",
        &[SchemaRule::always(&HistoricalPrice::SCHEMA)],
    )
    .params(SYMBOL_RANGE),
    Endpoint::new(
        "historical-chart",
        "historical-chart/{interval}",
        &[SchemaRule::always(&IntradayBar::SCHEMA)],
    )
    .params(&[ParamSpec::path("interval"), SYMBOL, FROM, TO]),
    Endpoint::new(
        "v3/historical-price-full",
        "historical-price-full/{symbol}",
        &[SchemaRule::always(&LegacyHistoricalPrice::SCHEMA)],
    )
    .version(ApiVersion::V3)
    .params(&[ParamSpec::path("symbol"), FROM, TO])
    .envelope("historical"),
    // Calendars
    Endpoint::new("dividends", "dividends", &[SchemaRule::always(&Dividend::SCHEMA)])
        .params(SYMBOL_LIMIT),
    Endpoint::new(
        "dividends-calendar",
        "dividends-calendar",
        &[SchemaRule::always(&Dividend::SCHEMA)],
    )
    .params(DATE_RANGE),
    Endpoint::new(
        "earnings-calendar",
        "earnings-calendar",
        &[SchemaRule::always(&EarningsEvent::SCHEMA)],
    )
    .params(DATE_RANGE),
    Endpoint::new("splits", "splits", &[SchemaRule::always(&Split::SCHEMA)]).params(SYMBOL_LIMIT),
    Endpoint::new("splits-calendar", "splits-calendar", &[SchemaRule::always(&Split::SCHEMA)])
        .params(DATE_RANGE),
    Endpoint::new("ipos-calendar", "ipos-calendar", &[SchemaRule::always(&IpoEvent::SCHEMA)])
        .params(DATE_RANGE),
    // Statements
    Endpoint::new(
        "income-statement",
        "income-statement",
        &[SchemaRule::always(&IncomeStatement::SCHEMA)],
    )
    .params(STATEMENT),
    Endpoint::new(
        "balance-sheet-statement",
        "balance-sheet-statement",
        &[SchemaRule::always(&BalanceSheet::SCHEMA)],
    )
    .params(STATEMENT),
    Endpoint::new(
        "cash-flow-statement",
        "cash-flow-statement",
        &[SchemaRule::always(&CashFlowStatement::SCHEMA)],
    )
    .params(STATEMENT),
    Endpoint::new("key-metrics", "key-metrics", &[SchemaRule::always(&KeyMetrics::SCHEMA)])
        .params(STATEMENT),
    Endpoint::new("ratios", "ratios", &[SchemaRule::always(&FinancialRatios::SCHEMA)])
        .params(STATEMENT),
    Endpoint::new("financial-reports-xlsx", "financial-reports-xlsx", &[])
        .params(&[
            SYMBOL,
            ParamSpec::query("year", ParamKind::Integer).required(),
            PERIOD.required(),
        ])
        .binary(),
    // Analyst
    Endpoint::new(
        "ratings-snapshot",
        "ratings-snapshot",
        &[SchemaRule::always(&RatingSnapshot::SCHEMA)],
    )
    .params(SYMBOL_ONLY)
    .single(),
    Endpoint::new(
        "ratings-historical",
        "ratings-historical",
        &[SchemaRule::always(&HistoricalRating::SCHEMA)],
    )
    .params(SYMBOL_LIMIT),
    // Filings
    Endpoint::new(
        "sec-filings-search/symbol",
        "sec-filings-search/symbol",
        &[SchemaRule::always(&SecFiling::SCHEMA)],
    )
    .params(&[SYMBOL, FROM.required(), TO.required(), PAGE, LIMIT])
    .paginated(PAGED),
    Endpoint::new(
        "sec-filings-company-search/symbol",
        "sec-filings-company-search/symbol",
        &[SchemaRule::always(&SecCompany::SCHEMA)],
    )
    .params(SYMBOL_ONLY),
    // Bulk
    Endpoint::new("profile-bulk", "profile-bulk", &[SchemaRule::always(&CompanyProfile::SCHEMA)])
        .params(&[ParamSpec::query("part", ParamKind::Integer).required()])
        .csv()
        .paginated(Pagination::new("part")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use fmp_core::{Cardinality, Format, ParamLocation};
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in CATALOG {
            assert!(seen.insert(endpoint.name), "duplicate endpoint {}", endpoint.name);
        }
    }

    #[test]
    fn test_every_record_endpoint_has_a_schema() {
        for endpoint in CATALOG {
            let downloads = endpoint.format == Format::Binary;
            assert_eq!(endpoint.schemas.is_empty(), downloads, "{}", endpoint.name);
        }
    }

    #[test]
    fn test_path_placeholders_are_declared() {
        for endpoint in CATALOG {
            for spec in endpoint.params.iter().filter(|p| p.location == ParamLocation::Path) {
                let placeholder = format!("{{{}}}", spec.name);
                assert!(endpoint.path.contains(&placeholder), "{}: {}", endpoint.name, spec.name);
            }
            let declared = endpoint
                .params
                .iter()
                .filter(|p| p.location == ParamLocation::Path)
                .count();
            assert_eq!(endpoint.path.matches('{').count(), declared, "{}", endpoint.name);
        }
    }

    #[test]
    fn test_paginated_endpoints_accept_their_page_parameter() {
        for endpoint in CATALOG.iter().filter(|e| e.is_paginated()) {
            let pagination = endpoint.pagination.unwrap();
            assert!(endpoint.param(pagination.param).is_some(), "{}", endpoint.name);
            if let Some(size) = pagination.size_param {
                assert!(endpoint.param(size).is_some(), "{}", endpoint.name);
            }
        }
    }

    #[test]
    fn test_endpoint_shapes() {
        let find = |name: &str| CATALOG.iter().find(|e| e.name == name).unwrap();
        assert_eq!(find("profile").cardinality, Cardinality::One);
        assert_eq!(find("batch-quote").schemas.len(), 4);
        assert_eq!(find("profile-bulk").format, Format::Csv);
        assert_eq!(find("financial-reports-xlsx").format, Format::Binary);
        assert_eq!(find("v3/historical-price-full").envelope, Some("historical"));
        assert_ne!(
            find("ratings-snapshot").schemas[0].schema.name,
            find("ratings-historical").schemas[0].schema.name
        );
    }
}
