//! Response normalization.
//!
//! The dispatcher turns a fetched body into typed records:
//!
//! 1. the body is classified as a list, a single object, an error or empty
//!    (see [`fmp_core::interpret`]);
//! 2. a schema is chosen from the endpoint's rules using a sample record;
//! 3. every record is validated against it and converted, dropping records
//!    that fail and keeping a [`SchemaMismatch`] for each;
//! 4. the records are shaped by the endpoint's cardinality.

use fmp_core::{
    Cardinality, Endpoint, FieldError, FieldProblem, Fetched, FmpError, Record, Result, Schema,
    SchemaMismatch, SchemaRule, interpret,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Shape of a normalized result.
#[derive(Clone, Debug, PartialEq)]
pub enum Data<R> {
    /// The call succeeded with no records.
    Empty,
    /// A single-record endpoint returned its record.
    One(R),
    /// A collection endpoint returned records, in upstream order.
    Many(Vec<R>),
}

impl<R> Data<R> {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        match self {
            Self::Empty => &[],
            Self::One(record) => std::slice::from_ref(record),
            Self::Many(records) => records,
        }
    }

    /// The records as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<R> {
        match self {
            Self::Empty => Vec::new(),
            Self::One(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}

/// Typed records of one call plus the records that were dropped.
///
/// Dropped records do not fail the call; they are kept here so callers can
/// inspect them.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized<R> {
    data: Data<R>,
    schema: Option<&'static str>,
    mismatches: Vec<SchemaMismatch>,
}

impl<R> Normalized<R> {
    /// An empty result.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: Data::Empty,
            schema: None,
            mismatches: Vec::new(),
        }
    }

    /// The shaped records.
    #[must_use]
    pub const fn data(&self) -> &Data<R> {
        &self.data
    }

    /// The records as a slice, whatever the shape.
    #[must_use]
    pub fn records(&self) -> &[R] {
        self.data.as_slice()
    }

    /// The first record, if any.
    #[must_use]
    pub fn first(&self) -> Option<&R> {
        self.records().first()
    }

    /// The record of a single-record endpoint.
    #[must_use]
    pub fn single(self) -> Option<R> {
        self.data.into_vec().into_iter().next()
    }

    /// The records as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<R> {
        self.data.into_vec()
    }

    /// Number of records kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no record was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Name of the schema chosen for the sample record, if any record was
    /// received.
    #[must_use]
    pub const fn schema(&self) -> Option<&'static str> {
        self.schema
    }

    /// Records dropped because they failed validation.
    #[must_use]
    pub fn mismatches(&self) -> &[SchemaMismatch] {
        &self.mismatches
    }

    /// Returns true if every received record was kept.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Split into records and dropped-record diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (Data<R>, Vec<SchemaMismatch>) {
        (self.data, self.mismatches)
    }
}

impl<R> Default for Normalized<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> IntoIterator for Normalized<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Applies an endpoint's schema rules to fetched bodies.
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'a> {
    endpoint: &'a Endpoint,
}

impl<'a> Dispatcher<'a> {
    /// Dispatcher for `endpoint`.
    #[must_use]
    pub const fn new(endpoint: &'a Endpoint) -> Self {
        Self { endpoint }
    }

    /// The endpoint whose rules are applied.
    #[must_use]
    pub const fn endpoint(&self) -> &'a Endpoint {
        self.endpoint
    }

    /// Pick the schema for `sample`.
    ///
    /// Rules are tried in order and the first whose predicate holds and whose
    /// schema validates the sample wins. If none validates, the first rule
    /// whose predicate holds is used, then the first rule, so the failure is
    /// reported per record. Returns `None` only if the endpoint has no rules.
    #[must_use]
    pub fn select_schema(&self, sample: &Value) -> Option<&'static Schema> {
        let rules = self.endpoint.schemas;
        rules
            .iter()
            .find(|rule| rule.accepts(sample))
            .or_else(|| rules.iter().find(|rule| (rule.when)(sample)))
            .or_else(|| rules.first())
            .map(|rule: &SchemaRule| rule.schema)
    }

    /// Interpret a fetched body and normalize its records.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Api`] or [`FmpError::PlanRestricted`] when the
    /// upstream signaled an error, and [`FmpError::SchemaNotRegistered`] when
    /// `R` cannot represent the selected schema.
    pub fn dispatch<R: Record>(&self, fetched: Fetched) -> Result<Normalized<R>> {
        let status = fetched.status;
        let payload = interpret(fetched, self.endpoint.envelope)?;
        debug!(
            endpoint = self.endpoint.name,
            status,
            empty = payload.is_empty(),
            "Payload classified"
        );
        self.normalize(payload.into_records())
    }

    /// Validate and convert already classified records.
    ///
    /// A single object must already be wrapped into a one-element sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::SchemaNotRegistered`] when `R` cannot represent
    /// the schema selected from the first record. Later records of a
    /// multiplexed endpoint whose schema `R` cannot hold are reported as
    /// mismatches.
    pub fn normalize<R: Record>(&self, records: Vec<Value>) -> Result<Normalized<R>> {
        let Some(sample) = records.first() else {
            return Ok(Normalized::empty());
        };
        let Some(chosen) = self.select_schema(sample) else {
            return Err(FmpError::SchemaNotRegistered {
                endpoint: self.endpoint.name.to_string(),
                schema: "<none>".to_string(),
            });
        };
        if !R::supports(chosen) {
            return Err(FmpError::SchemaNotRegistered {
                endpoint: self.endpoint.name.to_string(),
                schema: chosen.name.to_string(),
            });
        }
        debug!(
            endpoint = self.endpoint.name,
            schema = chosen.name,
            records = records.len(),
            "Schema selected"
        );

        let multiplexed = self.endpoint.schemas.len() > 1;
        let mut kept = Vec::with_capacity(records.len());
        let mut mismatches = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let schema = if multiplexed && index > 0 {
                self.select_schema(&record).unwrap_or(chosen)
            } else {
                chosen
            };
            let converted = if R::supports(schema) {
                schema.validate(&record).and_then(|fields| {
                    R::from_fields(schema, fields).map_err(|e| {
                        vec![FieldError::record(FieldProblem::Rejected(e.to_string()))]
                    })
                })
            } else {
                Err(vec![FieldError::record(FieldProblem::Rejected(format!(
                    "{} cannot hold {} records",
                    std::any::type_name::<R>(),
                    schema.name
                )))])
            };
            match converted {
                Ok(value) => kept.push(value),
                Err(field_errors) => {
                    let mismatch = SchemaMismatch {
                        index,
                        schema: schema.name,
                        record,
                        field_errors,
                    };
                    warn!(
                        endpoint = self.endpoint.name,
                        %mismatch,
                        "Dropping record that does not match its schema"
                    );
                    mismatches.push(mismatch);
                }
            }
        }

        let data = match (self.endpoint.cardinality, kept.len()) {
            (_, 0) => Data::Empty,
            (Cardinality::One, _) => {
                if kept.len() > 1 {
                    debug!(
                        endpoint = self.endpoint.name,
                        extra = kept.len() - 1,
                        "Single-record endpoint returned several records, keeping the first"
                    );
                }
                kept.into_iter().next().map_or(Data::Empty, Data::One)
            }
            (Cardinality::Many, _) => Data::Many(kept),
        };

        Ok(Normalized {
            data,
            schema: Some(chosen.name),
            mismatches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;
    use fmp_core::Fields;
    use fmp_models::{CompanyProfile, EquityQuote, HistoricalRating, LegacyHistoricalPrice, Quote};
    use serde_json::json;

    fn endpoint(name: &str) -> &'static Endpoint {
        Registry::global().get(name).unwrap()
    }

    fn equity(symbol: &str, price: Value) -> Value {
        json!({
            "symbol": symbol,
            "name": "Test Corp",
            "price": price,
            "changePercentage": 0.5,
            "change": 1.0,
            "volume": 1000,
            "dayLow": 1.0,
            "dayHigh": 2.0,
            "yearHigh": 3.0,
            "yearLow": 0.5,
            "marketCap": 1.0e9,
            "priceAvg50": 1.5,
            "priceAvg200": 1.4,
            "exchange": "NASDAQ",
            "open": 1.2,
            "previousClose": 1.1,
            "timestamp": 1_700_000_000
        })
    }

    #[test]
    fn test_partial_failure_is_contained() {
        let mut records: Vec<_> = (0..10).map(|i| equity(&format!("S{i}"), json!(10.0))).collect();
        records[4]["price"] = json!("not a number");

        let normalized: Normalized<Quote> = Dispatcher::new(endpoint("batch-quote"))
            .dispatch(Fetched::new(200, Value::Array(records)))
            .unwrap();

        assert_eq!(normalized.len(), 9);
        assert_eq!(normalized.mismatches().len(), 1);
        let mismatch = &normalized.mismatches()[0];
        assert_eq!(mismatch.index, 4);
        assert_eq!(mismatch.field_errors[0].field, "price");
        assert!(normalized.records().iter().all(|q| q.symbol() != "S4"));
    }

    #[test]
    fn test_single_object_is_wrapped_then_unwrapped() {
        let body = json!({"symbol": "AAPL", "companyName": "Apple Inc.", "price": 232.8});
        let normalized: Normalized<CompanyProfile> = Dispatcher::new(endpoint("profile"))
            .dispatch(Fetched::new(200, body))
            .unwrap();
        assert!(matches!(normalized.data(), Data::One(p) if p.symbol == "AAPL"));
        assert_eq!(normalized.schema(), Some("company-profile"));
    }

    #[test]
    fn test_single_object_on_collection_endpoint() {
        let normalized: Normalized<EquityQuote> = Dispatcher::new(endpoint("batch-quote"))
            .dispatch(Fetched::new(200, equity("AAPL", json!(232.8))))
            .unwrap();
        assert!(matches!(normalized.data(), Data::Many(q) if q.len() == 1));
    }

    #[test]
    fn test_profile_returns_exactly_one_record() {
        let body = json!([{"symbol": "AAPL", "companyName": "Apple Inc."}]);
        let profile = Dispatcher::new(endpoint("profile"))
            .dispatch::<CompanyProfile>(Fetched::new(200, body))
            .unwrap()
            .single()
            .unwrap();
        assert_eq!(profile.symbol, "AAPL");
    }

    #[test]
    fn test_unknown_symbol_is_empty() {
        let normalized: Normalized<Quote> = Dispatcher::new(endpoint("quote"))
            .dispatch(Fetched::new(200, json!([])))
            .unwrap();
        assert_eq!(normalized.data(), &Data::Empty);
        assert!(normalized.is_complete());
        assert_eq!(normalized.schema(), None);
    }

    #[test]
    fn test_premium_notice_is_plan_restricted() {
        let body = json!({
            "Error Message": "Special Endpoint : This endpoint is not available under your current subscription"
        });
        let err = Dispatcher::new(endpoint("ratings-historical"))
            .dispatch::<HistoricalRating>(Fetched::new(200, body))
            .unwrap_err();
        assert!(err.is_plan_restricted());

        let err = Dispatcher::new(endpoint("quote"))
            .dispatch::<Quote>(Fetched::new(402, json!("Payment Required")))
            .unwrap_err();
        assert!(err.is_plan_restricted());
    }

    #[test]
    fn test_invalid_key_is_api_error() {
        let body = json!({"Error Message": "Invalid API KEY. Please retry or visit our documentation."});
        let err = Dispatcher::new(endpoint("quote"))
            .dispatch::<Quote>(Fetched::new(401, body))
            .unwrap_err();
        assert!(matches!(err, FmpError::Api { status: 401, ref message } if message.starts_with("Invalid API KEY")));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let body = json!({
            "symbol": "AAPL",
            "historical": [
                {"date": "2024-01-03", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 10},
                {"date": "2024-01-02", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.4, "volume": 12}
            ]
        });
        let prices: Normalized<LegacyHistoricalPrice> =
            Dispatcher::new(endpoint("v3/historical-price-full"))
                .dispatch(Fetched::new(200, body))
                .unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.records()[1].close, 1.4);
    }

    #[test]
    fn test_quote_schemas_selected_per_record() {
        let index = json!({
            "symbol": "^GSPC",
            "name": "S&P 500",
            "price": 5000.0,
            "change": 10.0,
            "changePercentage": 0.2,
            "exchange": "INDEX",
            "timestamp": 1_700_000_000
        });
        let body = json!([index, equity("AAPL", json!(232.8))]);
        let quotes: Normalized<Quote> = Dispatcher::new(endpoint("batch-quote"))
            .dispatch(Fetched::new(200, body))
            .unwrap();

        assert_eq!(quotes.schema(), Some("index-quote"));
        assert!(matches!(quotes.records()[0], Quote::Index(_)));
        assert!(matches!(quotes.records()[1], Quote::Equity(_)));
    }

    #[test]
    fn test_narrow_record_type_drops_other_quote_kinds() {
        let index = json!({
            "symbol": "^GSPC",
            "name": "S&P 500",
            "price": 5000.0,
            "change": 10.0,
            "changePercentage": 0.2,
            "exchange": "INDEX",
            "timestamp": 1_700_000_000
        });
        let body = json!([equity("AAPL", json!(232.8)), index]);
        let quotes: Normalized<EquityQuote> = Dispatcher::new(endpoint("batch-quote"))
            .dispatch(Fetched::new(200, body.clone()))
            .unwrap();

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes.records()[0].symbol, "AAPL");
        assert_eq!(quotes.mismatches().len(), 1);
        assert_eq!(quotes.mismatches()[0].index, 1);
        assert_eq!(quotes.mismatches()[0].schema, "index-quote");

        // The first record still decides whether the type fits at all.
        let reversed = json!([body[1], body[0]]);
        let err = Dispatcher::new(endpoint("batch-quote"))
            .dispatch::<EquityQuote>(Fetched::new(200, reversed))
            .unwrap_err();
        assert!(matches!(
            err,
            FmpError::SchemaNotRegistered { ref schema, .. } if schema == "index-quote"
        ));
    }

    #[test]
    fn test_record_type_must_support_schema() {
        let err = Dispatcher::new(endpoint("profile"))
            .dispatch::<EquityQuote>(Fetched::new(200, json!([{"symbol": "AAPL"}])))
            .unwrap_err();
        assert!(matches!(err, FmpError::SchemaNotRegistered { ref schema, .. } if schema == "company-profile"));
    }

    #[test]
    fn test_untyped_fields_hold_coerced_values() {
        let body = json!([{"symbol": "AAPL", "price": "232.8", "extra": true}]);
        let fields: Normalized<Fields> = Dispatcher::new(endpoint("quote-short"))
            .dispatch(Fetched::new(200, body))
            .unwrap();
        let first = fields.first().unwrap();
        assert_eq!(first["price"], json!(232.8));
        assert!(!first.contains_key("extra"));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let body = json!([{"symbol": "AAPL", "name": "Apple", "exchange": "NASDAQ"}]);
        let dispatcher = Dispatcher::new(endpoint("stock-list"));
        let first: Normalized<fmp_models::ListedSymbol> =
            dispatcher.dispatch(Fetched::new(200, body.clone())).unwrap();
        let second = dispatcher.dispatch(Fetched::new(200, body)).unwrap();
        assert_eq!(first, second);
    }
}
