//! Endpoint descriptors.
//!
//! An [`Endpoint`] is immutable `'static` data describing one upstream
//! operation: where it lives, which parameters it accepts, how its response is
//! encoded, whether it paginates, and which schemas its records may follow.

use serde_json::Value;
use std::fmt;

use crate::error::{FmpError, Result};
use crate::query::{ParamValue, Params};
use crate::schema::Schema;

/// Query parameter every JSON endpoint accepts to switch its body to CSV.
pub const DATATYPE_PARAM: &str = "datatype";

/// Upstream API generation hosting an endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The current `stable` API.
    #[default]
    Stable,
    /// Legacy `api/v4`.
    V4,
    /// Legacy `api/v3`.
    V3,
}

impl ApiVersion {
    /// Path prefix below the host.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::V4 => "api/v4",
            Self::V3 => "api/v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Accepted value type of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Free text.
    Text,
    /// Whole number.
    Integer,
    /// Any number.
    Number,
    /// Date, as [`ParamValue::Date`] or pre-formatted text.
    Date,
    /// Boolean.
    Flag,
    /// Multi-value parameter, as a list or pre-joined text.
    List,
}

impl ParamKind {
    /// Returns true if `value` is acceptable for this kind.
    #[must_use]
    pub const fn accepts(&self, value: &ParamValue) -> bool {
        matches!(
            (self, value),
            (Self::Text, ParamValue::Text(_))
                | (Self::Integer, ParamValue::Integer(_))
                | (Self::Number, ParamValue::Integer(_) | ParamValue::Number(_))
                | (Self::Date, ParamValue::Date(_) | ParamValue::Text(_))
                | (Self::Flag, ParamValue::Flag(_))
                | (Self::List, ParamValue::List(_) | ParamValue::Text(_))
        )
    }
}

/// Where a parameter is placed in the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// Query string.
    Query,
    /// `{name}` placeholder in the path template.
    Path,
}

/// Serialization of multi-value parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArrayStyle {
    /// `symbols=AAPL,MSFT`
    #[default]
    Comma,
    /// `symbol=AAPL&symbol=MSFT`
    Repeated,
}

/// Declaration of one accepted parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    /// Wire name.
    pub name: &'static str,
    /// Accepted value type.
    pub kind: ParamKind,
    /// Whether the request is invalid without it.
    pub required: bool,
    /// Query string or path.
    pub location: ParamLocation,
    /// List serialization.
    pub array_style: ArrayStyle,
}

impl ParamSpec {
    /// Optional query parameter.
    #[must_use]
    pub const fn query(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            location: ParamLocation::Query,
            array_style: ArrayStyle::Comma,
        }
    }

    /// Path parameter. Path parameters are always required.
    #[must_use]
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
            required: true,
            location: ParamLocation::Path,
            array_style: ArrayStyle::Comma,
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Serializes list values as repeated keys.
    #[must_use]
    pub const fn repeated(mut self) -> Self {
        self.array_style = ArrayStyle::Repeated;
        self
    }
}

/// Whether the endpoint contract returns one record or a collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// At most one record.
    One,
    /// Any number of records.
    #[default]
    Many,
}

/// Wire format of a response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON.
    #[default]
    Json,
    /// CSV with a header row.
    Csv,
    /// A file download returned as raw bytes.
    Binary,
}

/// Pagination contract of a paginated endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Parameter carrying the page number.
    pub param: &'static str,
    /// Parameter carrying the page size, if the endpoint has one.
    pub size_param: Option<&'static str>,
    /// Number of the first page.
    pub first_page: u32,
}

impl Pagination {
    /// Zero-based pagination over `param`.
    #[must_use]
    pub const fn new(param: &'static str) -> Self {
        Self {
            param,
            size_param: None,
            first_page: 0,
        }
    }

    /// Declares the parameter carrying the page size.
    #[must_use]
    pub const fn sized_by(mut self, size_param: &'static str) -> Self {
        self.size_param = Some(size_param);
        self
    }
}

/// Predicate evaluated against a sample record.
pub type Discriminator = fn(&Value) -> bool;

/// A candidate schema together with the predicate selecting it.
#[derive(Clone, Copy, Debug)]
pub struct SchemaRule {
    /// Candidate schema.
    pub schema: &'static Schema,
    /// Predicate over the sample record.
    pub when: Discriminator,
}

const fn any_record(_: &Value) -> bool {
    true
}

impl SchemaRule {
    /// A rule that applies to every record.
    #[must_use]
    pub const fn always(schema: &'static Schema) -> Self {
        Self {
            schema,
            when: any_record,
        }
    }

    /// A rule that applies when `when` holds for the sample record.
    #[must_use]
    pub const fn when(schema: &'static Schema, when: Discriminator) -> Self {
        Self { schema, when }
    }

    /// Returns true if the predicate holds and the schema validates `sample`.
    #[must_use]
    pub fn accepts(&self, sample: &Value) -> bool {
        (self.when)(sample) && self.schema.accepts(sample)
    }
}

/// Description of one upstream operation.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    /// Unique endpoint name.
    pub name: &'static str,
    /// Path template below the version prefix, with `{name}` placeholders.
    pub path: &'static str,
    /// API generation.
    pub version: ApiVersion,
    /// Accepted parameters, in query string order.
    pub params: &'static [ParamSpec],
    /// One record or many.
    pub cardinality: Cardinality,
    /// Body encoding.
    pub format: Format,
    /// Key of the array inside a wrapping object, for enveloped responses.
    pub envelope: Option<&'static str>,
    /// Pagination contract.
    pub pagination: Option<Pagination>,
    /// Candidate schemas in priority order.
    pub schemas: &'static [SchemaRule],
}

impl Endpoint {
    /// Creates a stable-API JSON endpoint returning a collection.
    #[must_use]
    pub const fn new(name: &'static str, path: &'static str, schemas: &'static [SchemaRule]) -> Self {
        Self {
            name,
            path,
            version: ApiVersion::Stable,
            params: &[],
            cardinality: Cardinality::Many,
            format: Format::Json,
            envelope: None,
            pagination: None,
            schemas,
        }
    }

    /// Sets the accepted parameters.
    #[must_use]
    pub const fn params(mut self, params: &'static [ParamSpec]) -> Self {
        self.params = params;
        self
    }

    /// Sets the API generation.
    #[must_use]
    pub const fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Declares that the endpoint returns at most one record.
    #[must_use]
    pub const fn single(mut self) -> Self {
        self.cardinality = Cardinality::One;
        self
    }

    /// Declares a CSV response body.
    #[must_use]
    pub const fn csv(mut self) -> Self {
        self.format = Format::Csv;
        self
    }

    /// Declares a file download returned as raw bytes.
    #[must_use]
    pub const fn binary(mut self) -> Self {
        self.format = Format::Binary;
        self
    }

    /// Declares the envelope key holding the records.
    #[must_use]
    pub const fn envelope(mut self, key: &'static str) -> Self {
        self.envelope = Some(key);
        self
    }

    /// Declares the pagination contract.
    #[must_use]
    pub const fn paginated(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Looks up a parameter declaration.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Returns true if the endpoint declares a pagination contract.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.pagination.is_some()
    }

    /// Body format of a call. A `datatype=csv` parameter overrides the
    /// declared format of JSON endpoints.
    #[must_use]
    pub fn response_format(&self, params: &Params) -> Format {
        match (self.format, params.get(DATATYPE_PARAM)) {
            (Format::Json, Some(ParamValue::Text(kind))) if kind.eq_ignore_ascii_case("csv") => {
                Format::Csv
            }
            (format, _) => format,
        }
    }

    /// Renders the path and query string pairs for `params`.
    ///
    /// The API key is not part of the rendered query; the executor appends it.
    /// A `datatype` of `csv` or `json` is accepted by every endpoint that does
    /// not declare it and is rendered last.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] for unknown parameters, values of
    /// the wrong kind, and missing required parameters.
    pub fn render(&self, params: &Params) -> Result<RenderedRequest> {
        let mut datatype = None;
        for (name, value) in params.iter() {
            if name == DATATYPE_PARAM && self.param(name).is_none() {
                datatype = Some(self.datatype(value)?);
                continue;
            }
            let spec = self.param(name).ok_or_else(|| {
                FmpError::InvalidParameter(format!("{name} is not accepted by {}", self.name))
            })?;
            if !spec.kind.accepts(value) {
                return Err(FmpError::InvalidParameter(format!(
                    "{name} of {} expects {:?}, got {}",
                    self.name,
                    spec.kind,
                    value.type_name()
                )));
            }
        }

        let mut path = self.path.to_string();
        let mut query = Vec::new();

        for spec in self.params {
            let Some(value) = params.get(spec.name) else {
                if spec.required {
                    return Err(FmpError::InvalidParameter(format!(
                        "{} requires {}",
                        self.name, spec.name
                    )));
                }
                continue;
            };

            let rendered = value.render();
            match spec.location {
                ParamLocation::Path => {
                    let [segment] = rendered.as_slice() else {
                        return Err(FmpError::InvalidParameter(format!(
                            "path parameter {} of {} takes a single value",
                            spec.name, self.name
                        )));
                    };
                    let placeholder = format!("{{{}}}", spec.name);
                    path = path.replace(&placeholder, &urlencoding::encode(segment));
                }
                ParamLocation::Query => match (value, spec.array_style) {
                    (ParamValue::List(_), ArrayStyle::Comma) => {
                        query.push((spec.name.to_string(), rendered.join(",")));
                    }
                    _ => query.extend(rendered.into_iter().map(|v| (spec.name.to_string(), v))),
                },
            }
        }

        if let Some(datatype) = datatype {
            query.push((DATATYPE_PARAM.to_string(), datatype));
        }

        Ok(RenderedRequest { path, query })
    }

    fn datatype(&self, value: &ParamValue) -> Result<String> {
        match value {
            ParamValue::Text(kind) if self.format != Format::Binary => {
                let kind = kind.to_ascii_lowercase();
                if kind == "csv" || kind == "json" {
                    return Ok(kind);
                }
            }
            _ => {}
        }
        Err(FmpError::InvalidParameter(format!(
            "{DATATYPE_PARAM} of {} must be csv or json, got {value:?}",
            self.name
        )))
    }
}

/// Path and query pairs produced by [`Endpoint::render`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedRequest {
    /// Path below the version prefix with placeholders substituted.
    pub path: String,
    /// Query pairs in declaration order, without the API key.
    pub query: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSpec};
    use chrono::NaiveDate;

    const BAR: Schema = Schema {
        name: "test-bar",
        fields: &[FieldSpec::required("date", FieldKind::DateTime)],
    };

    const CHART: Endpoint = Endpoint::new("chart", "historical-chart/{interval}", &[SchemaRule::always(&BAR)])
        .params(&[
            ParamSpec::path("interval"),
            ParamSpec::query("symbol", ParamKind::Text).required(),
            ParamSpec::query("from", ParamKind::Date),
            ParamSpec::query("to", ParamKind::Date),
        ]);

    const BATCH: Endpoint = Endpoint::new("batch", "batch-quote", &[SchemaRule::always(&BAR)]).params(&[
        ParamSpec::query("symbols", ParamKind::List).required(),
        ParamSpec::query("exchange", ParamKind::List).repeated(),
    ]);

    #[test]
    fn test_render_path_and_query() {
        let params = Params::new()
            .with("symbol", "AAPL")
            .with("interval", "5min")
            .with("to", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .with_opt("from", None::<NaiveDate>);
        let rendered = CHART.render(&params).unwrap();
        assert_eq!(rendered.path, "historical-chart/5min");
        assert_eq!(
            rendered.query,
            vec![
                ("symbol".to_string(), "AAPL".to_string()),
                ("to".to_string(), "2024-02-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let params = Params::new().with("symbol", "^GSPC").with("interval", "1 hour");
        assert_eq!(CHART.render(&params).unwrap().path, "historical-chart/1%20hour");
    }

    #[test]
    fn test_array_styles() {
        let symbols: &[&str] = &["AAPL", "MSFT"];
        let params = Params::new()
            .with("symbols", symbols)
            .with("exchange", vec!["NYSE".to_string(), "NASDAQ".to_string()]);
        let rendered = BATCH.render(&params).unwrap();
        assert_eq!(
            rendered.query,
            vec![
                ("symbols".to_string(), "AAPL,MSFT".to_string()),
                ("exchange".to_string(), "NYSE".to_string()),
                ("exchange".to_string(), "NASDAQ".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = CHART.render(&Params::new().with("interval", "1min")).unwrap_err();
        assert!(matches!(err, FmpError::InvalidParameter(msg) if msg.contains("symbol")));
    }

    #[test]
    fn test_unknown_and_mistyped_parameters() {
        let unknown = Params::new().with("symbol", "AAPL").with("interval", "1min").with("limt", 5_u32);
        assert!(matches!(CHART.render(&unknown), Err(FmpError::InvalidParameter(_))));

        let mistyped = Params::new().with("symbol", true).with("interval", "1min");
        assert!(matches!(CHART.render(&mistyped), Err(FmpError::InvalidParameter(_))));
    }

    #[test]
    fn test_datatype_switches_json_to_csv() {
        let params = Params::new().with("symbol", "AAPL").with("interval", "1min");
        assert_eq!(CHART.response_format(&params), Format::Json);

        let csv = params.clone().with(DATATYPE_PARAM, "CSV");
        assert_eq!(CHART.response_format(&csv), Format::Csv);
        let rendered = CHART.render(&csv).unwrap();
        assert_eq!(
            rendered.query.last(),
            Some(&("datatype".to_string(), "csv".to_string()))
        );

        let bogus = params.with(DATATYPE_PARAM, "xml");
        assert!(matches!(CHART.render(&bogus), Err(FmpError::InvalidParameter(_))));

        let download = Endpoint::new("report", "financial-reports-xlsx", &[]).binary();
        let csv = Params::new().with(DATATYPE_PARAM, "csv");
        assert_eq!(download.response_format(&csv), Format::Binary);
        assert!(download.render(&csv).is_err());
    }

    #[test]
    fn test_builder_flags() {
        let endpoint = Endpoint::new("legacy", "historical-price-full/{symbol}", &[])
            .version(ApiVersion::V3)
            .envelope("historical")
            .single()
            .csv()
            .paginated(Pagination::new("page").sized_by("limit"));
        assert_eq!(endpoint.version.prefix(), "api/v3");
        assert_eq!(endpoint.envelope, Some("historical"));
        assert_eq!(endpoint.cardinality, Cardinality::One);
        assert_eq!(endpoint.format, Format::Csv);
        assert!(endpoint.is_paginated());
        assert_eq!(endpoint.pagination.unwrap().size_param, Some("limit"));
    }
}
