//! Declared record shapes and their validation.
//!
//! A [`Schema`] lists the fields of one kind of response record together with
//! a semantic [`FieldKind`] and a [`Presence`] flag. [`Schema::validate`]
//! coerces a raw JSON object into the canonical form expected by the typed
//! record structs, collecting every field problem instead of stopping at the
//! first one.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use crate::coerce::{self, json_type};

/// Semantic type of a schema field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text. Bare numbers are accepted and stringified.
    Text,
    /// Floating point number; integers and numeric strings are accepted.
    Number,
    /// Whole number; integral floats and numeric strings are accepted.
    Integer,
    /// Calendar date (`YYYY-MM-DD`); longer datetime strings are truncated.
    Date,
    /// Date and time; several upstream spellings and unix seconds are accepted.
    DateTime,
    /// Boolean sent either as `true`/`false` or as `1`/`0`.
    Flag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Flag => "flag",
        };
        f.write_str(name)
    }
}

/// Whether a field must be present and non-null.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Absence or `null` is a validation failure.
    Required,
    /// Absence or `null` is accepted and normalized to `null`.
    Optional,
}

/// One declared field of a schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Semantic type.
    pub kind: FieldKind,
    /// Required or optional.
    pub presence: Presence,
}

impl FieldSpec {
    /// Creates a required field.
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }

    /// Returns true if the field may be absent or null.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.presence, Presence::Optional)
    }
}

/// The declared shape of one kind of response record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    /// Unique schema name, used in diagnostics and registry checks.
    pub name: &'static str,
    /// Declared fields. Payload fields not listed here are ignored.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Looks up a field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterates over the required fields.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.is_optional())
    }

    /// Validates and coerces one raw record.
    ///
    /// On success the returned map holds exactly the declared fields, in
    /// canonical form, with absent optional fields set to `null`.
    ///
    /// # Errors
    ///
    /// Returns every field problem found in the record.
    pub fn validate(&self, record: &Value) -> Result<Map<String, Value>, Vec<FieldError>> {
        let Value::Object(object) = record else {
            return Err(vec![FieldError::record(FieldProblem::NotAnObject {
                found: json_type(record),
            })]);
        };

        let mut fields = Map::with_capacity(self.fields.len());
        let mut errors = Vec::new();

        for spec in self.fields {
            match object.get(spec.name) {
                Some(value) if !coerce::is_absent(spec.kind, value) => {
                    match coerce::coerce(spec.kind, value) {
                        Ok(coerced) => {
                            fields.insert(spec.name.to_string(), coerced);
                        }
                        Err(problem) => errors.push(FieldError::new(spec.name, problem)),
                    }
                }
                _ if spec.is_optional() => {
                    fields.insert(spec.name.to_string(), Value::Null);
                }
                _ => errors.push(FieldError::new(spec.name, FieldProblem::Missing)),
            }
        }

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(errors)
        }
    }

    /// Returns true if the record validates without error.
    #[must_use]
    pub fn accepts(&self, record: &Value) -> bool {
        self.validate(record).is_ok()
    }
}

/// What went wrong with a single field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldProblem {
    /// A required field was absent or null.
    #[error("required field is missing or null")]
    Missing,

    /// The value has a JSON type the field kind never accepts.
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// Declared kind.
        expected: FieldKind,
        /// JSON type actually received.
        found: &'static str,
    },

    /// The value has an acceptable JSON type but could not be read.
    #[error("cannot read {value:?} as {expected}")]
    Unparseable {
        /// Declared kind.
        expected: FieldKind,
        /// Raw value as received.
        value: String,
    },

    /// The record itself is not a JSON object.
    #[error("record is a {found}, not an object")]
    NotAnObject {
        /// JSON type actually received.
        found: &'static str,
    },

    /// The coerced record was rejected when building the typed value.
    #[error("rejected by record type: {0}")]
    Rejected(String),
}

/// A problem attached to a named field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field, or `<record>` for whole-record problems.
    pub field: String,
    /// The problem.
    pub problem: FieldProblem,
}

impl FieldError {
    /// Placeholder field name for problems that concern the whole record.
    pub const RECORD: &'static str = "<record>";

    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, problem: FieldProblem) -> Self {
        Self {
            field: field.into(),
            problem,
        }
    }

    /// Creates an error concerning the whole record.
    #[must_use]
    pub fn record(problem: FieldProblem) -> Self {
        Self::new(Self::RECORD, problem)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// A record dropped from a result set because it did not fit its schema.
///
/// Mismatches are diagnostics, not errors: the remaining records of the same
/// response are still returned.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaMismatch {
    /// Position of the record in the upstream sequence.
    pub index: usize,
    /// Name of the schema the record was validated against.
    pub schema: &'static str,
    /// The offending record, as received.
    pub record: Value,
    /// Every problem found in the record.
    pub field_errors: Vec<FieldError>,
}

impl fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {} does not match {}: ", self.index, self.schema)?;
        for (i, error) in self.field_errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaMismatch {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PRICE: Schema = Schema {
        name: "test-price",
        fields: &[
            FieldSpec::required("symbol", FieldKind::Text),
            FieldSpec::required("date", FieldKind::Date),
            FieldSpec::required("close", FieldKind::Number),
            FieldSpec::optional("volume", FieldKind::Integer),
        ],
    };

    #[test]
    fn test_validate_coerces_and_fills_optional() {
        let fields = PRICE
            .validate(&json!({"symbol": "AAPL", "date": "2024-01-02", "close": "185.64"}))
            .unwrap();
        assert_eq!(fields["close"], json!(185.64));
        assert_eq!(fields["volume"], Value::Null);
    }

    #[test]
    fn test_validate_ignores_unknown_fields() {
        let fields = PRICE
            .validate(&json!({
                "symbol": "AAPL",
                "date": "2024-01-02",
                "close": 185.64,
                "brandNewUpstreamField": {"nested": true}
            }))
            .unwrap();
        assert!(!fields.contains_key("brandNewUpstreamField"));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let errors = PRICE
            .validate(&json!({"symbol": null, "date": "yesterday", "close": 1.0, "volume": 1.5}))
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["symbol", "date", "volume"]);
        assert_eq!(errors[0].problem, FieldProblem::Missing);
    }

    #[test]
    fn test_validate_rejects_non_objects() {
        let errors = PRICE.validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FieldError::RECORD);
        assert!(!PRICE.accepts(&json!("AAPL")));
    }

    #[test]
    fn test_required_fields() {
        let names: Vec<_> = PRICE.required_fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["symbol", "date", "close"]);
        assert_eq!(PRICE.field("volume").map(|f| f.kind), Some(FieldKind::Integer));
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = SchemaMismatch {
            index: 3,
            schema: PRICE.name,
            record: json!({}),
            field_errors: vec![
                FieldError::new("symbol", FieldProblem::Missing),
                FieldError::new("close", FieldProblem::Missing),
            ],
        };
        assert_eq!(
            mismatch.to_string(),
            "record 3 does not match test-price: symbol: required field is missing or null; \
             close: required field is missing or null"
        );
    }
}
