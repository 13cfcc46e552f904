//! Named request parameters.
//!
//! [`Params`] is an ordered collection of parameter values supplied by the
//! endpoint wrappers. Unset optional values are never inserted, so they never
//! reach the query string.

use chrono::NaiveDate;

use crate::frequency::{Interval, Period};
use crate::types::Symbol;

/// A single parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Free text.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Number(f64),
    /// Calendar date, rendered as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Boolean, rendered as `true`/`false`.
    Flag(bool),
    /// Ordered multi-value parameter.
    List(Vec<String>),
}

impl ParamValue {
    /// Renders the value as query string fragments.
    ///
    /// Scalars render to a single fragment; lists render to one fragment per
    /// element.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        match self {
            Self::Text(s) => vec![s.clone()],
            Self::Integer(i) => vec![i.to_string()],
            Self::Number(n) => vec![n.to_string()],
            Self::Date(d) => vec![d.format("%Y-%m-%d").to_string()],
            Self::Flag(b) => vec![b.to_string()],
            Self::List(items) => items.clone(),
        }
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Date(_) => "date",
            Self::Flag(_) => "flag",
            Self::List(_) => "list",
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Symbol> for ParamValue {
    fn from(s: Symbol) -> Self {
        Self::Text(s.as_str().to_string())
    }
}

impl From<&Symbol> for ParamValue {
    fn from(s: &Symbol) -> Self {
        Self::Text(s.as_str().to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<Period> for ParamValue {
    fn from(p: Period) -> Self {
        Self::Text(p.as_str().to_string())
    }
}

impl From<Interval> for ParamValue {
    fn from(i: Interval) -> Self {
        Self::Text(i.as_str().to_string())
    }
}

impl<S: AsRef<str>> From<&[S]> for ParamValue {
    fn from(items: &[S]) -> Self {
        Self::List(items.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Ordered parameter set for one request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a parameter, replacing any previous value with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a parameter only when a value is present.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Sets a parameter in place, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Removes a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterates over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the number of set parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_values_are_omitted() {
        let params = Params::new()
            .with("symbol", "AAPL")
            .with_opt("limit", None::<u32>)
            .with_opt("from", NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(params.len(), 2);
        assert!(params.get("limit").is_none());
        assert_eq!(params.get("from").unwrap().render(), vec!["2024-01-02"]);
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let mut params = Params::new().with("page", 0_u32);
        params.set("page", 3_u32);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("page"), Some(&ParamValue::Integer(3)));
        assert_eq!(params.remove("page"), Some(ParamValue::Integer(3)));
        assert!(params.is_empty());
    }

    #[test]
    fn test_render_values() {
        assert_eq!(ParamValue::from(true).render(), vec!["true"]);
        assert_eq!(ParamValue::from(Period::Quarter).render(), vec!["quarter"]);
        assert_eq!(ParamValue::from(2.5).render(), vec!["2.5"]);
        let symbols: &[&str] = &["AAPL", "MSFT"];
        assert_eq!(ParamValue::from(symbols).render(), vec!["AAPL", "MSFT"]);
    }
}
