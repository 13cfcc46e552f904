//! Lenient coercion of upstream JSON values into declared field kinds.
//!
//! Upstream sends the same field as an integer, a float or a numeric string
//! depending on asset class and plan tier. Coercion maps every accepted
//! spelling onto one canonical JSON value so record structs can use plain
//! Rust types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Number, Value};

use crate::schema::{FieldKind, FieldProblem};

/// Canonical date format emitted for [`FieldKind::Date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical datetime format emitted for [`FieldKind::DateTime`].
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Coerces a non-null value into the canonical representation of `kind`.
pub(crate) fn coerce(kind: FieldKind, value: &Value) -> Result<Value, FieldProblem> {
    match kind {
        FieldKind::Text => coerce_text(value),
        FieldKind::Number => coerce_number(value),
        FieldKind::Integer => coerce_integer(value),
        FieldKind::Date => coerce_date(value),
        FieldKind::DateTime => coerce_datetime(value),
        FieldKind::Flag => coerce_flag(value),
    }
}

/// Returns true for values that count as absent: `null` and, for
/// non-text kinds, blank strings.
pub(crate) fn is_absent(kind: FieldKind, value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => kind != FieldKind::Text && s.trim().is_empty(),
        _ => false,
    }
}

/// Short JSON type name used in diagnostics.
pub(crate) const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(expected: FieldKind, value: &Value) -> FieldProblem {
    FieldProblem::WrongType {
        expected,
        found: json_type(value),
    }
}

fn unparseable(expected: FieldKind, raw: &str) -> FieldProblem {
    FieldProblem::Unparseable {
        expected,
        value: raw.to_string(),
    }
}

fn coerce_text(value: &Value) -> Result<Value, FieldProblem> {
    match value {
        Value::String(_) => Ok(value.clone()),
        // CIKs and fiscal years arrive as bare numbers on some endpoints.
        Value::Number(n) => Ok(Value::String(n.to_string())),
        _ => Err(wrong_type(FieldKind::Text, value)),
    }
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn coerce_number(value: &Value) -> Result<Value, FieldProblem> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(s) => parse_float(s)
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| unparseable(FieldKind::Number, s)),
        _ => Err(wrong_type(FieldKind::Number, value)),
    }
}

fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn coerce_integer(value: &Value) -> Result<Value, FieldProblem> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Value::from(i));
            }
            n.as_f64()
                .and_then(integral)
                .map(Value::from)
                .ok_or_else(|| unparseable(FieldKind::Integer, &n.to_string()))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| parse_float(trimmed).and_then(integral))
                .map(Value::from)
                .ok_or_else(|| unparseable(FieldKind::Integer, s))
        }
        _ => Err(wrong_type(FieldKind::Integer, value)),
    }
}

fn coerce_date(value: &Value) -> Result<Value, FieldProblem> {
    let Value::String(s) = value else {
        return Err(wrong_type(FieldKind::Date, value));
    };
    let trimmed = s.trim();
    // Datetimes are accepted and truncated to their calendar date.
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, DATE_FORMAT)
        .map(|d| Value::String(d.format(DATE_FORMAT).to_string()))
        .map_err(|_| unparseable(FieldKind::Date, s))
}

/// Offset-qualified datetimes are converted to UTC.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%z"))
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| {
            DATETIME_INPUT_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn coerce_datetime(value: &Value) -> Result<Value, FieldProblem> {
    let parsed = match value {
        Value::String(s) => {
            parse_datetime(s.trim()).ok_or_else(|| unparseable(FieldKind::DateTime, s))?
        }
        // Unix seconds.
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| unparseable(FieldKind::DateTime, &n.to_string()))?,
        _ => return Err(wrong_type(FieldKind::DateTime, value)),
    };
    Ok(Value::String(parsed.format(DATETIME_FORMAT).to_string()))
}

fn coerce_flag(value: &Value) -> Result<Value, FieldProblem> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(Value::Bool(false)),
            Some(1) => Ok(Value::Bool(true)),
            _ => Err(unparseable(FieldKind::Flag, &n.to_string())),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Value::Bool(true)),
            "false" | "0" | "no" => Ok(Value::Bool(false)),
            _ => Err(unparseable(FieldKind::Flag, s)),
        },
        _ => Err(wrong_type(FieldKind::Flag, value)),
    }
}
