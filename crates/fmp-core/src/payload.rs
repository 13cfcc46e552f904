//! Classification of decoded response bodies.
//!
//! Every decoded body falls into exactly one [`Payload`] shape. Upstream
//! reports many failures with HTTP 200 and an error object in the body, so
//! [`interpret`] looks at both the status code and the body before anything
//! is handed to schema validation.

use serde_json::{Map, Value};

use crate::error::{
    FmpError, Result, STATUS_PAYMENT_REQUIRED, STATUS_TOO_MANY_REQUESTS, STATUS_UNAUTHORIZED,
};

/// Keys upstream uses to report an error inside a JSON object.
pub const ERROR_KEYS: &[&str] = &["Error Message", "error", "Error"];

const PLAN_MARKERS: &[&str] = &[
    "premium",
    "subscription",
    "restricted endpoint",
    "exclusive endpoint",
    "special endpoint",
    "upgrade",
];

/// A response as decoded by the executor, before interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body. Empty bodies decode to `null`; CSV bodies decode to an
    /// array of objects.
    pub body: Value,
}

impl Fetched {
    /// Creates a fetched response.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The shape of a decoded body.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// A non-empty sequence of records.
    List(Vec<Value>),
    /// A single record object.
    Single(Map<String, Value>),
    /// An error reported in the body.
    Error(String),
    /// No data: `null`, `[]`, `{}` or an empty envelope.
    Empty,
}

impl Payload {
    /// Classifies a decoded body.
    ///
    /// Total: every JSON value maps to exactly one variant. When `envelope`
    /// names a key, objects holding that key are unwrapped to its value
    /// before classification.
    #[must_use]
    pub fn classify(body: Value, envelope: Option<&str>) -> Self {
        match body {
            Value::Null => Self::Empty,
            Value::Array(items) if items.is_empty() => Self::Empty,
            Value::Array(items) => Self::List(items),
            Value::Object(object) if object.is_empty() => Self::Empty,
            Value::Object(mut object) => {
                if let Some(message) = error_message(&object) {
                    return Self::Error(message);
                }
                if let Some(inner) = envelope.and_then(|key| object.remove(key)) {
                    return match inner {
                        Value::Object(_) | Value::Array(_) | Value::Null => Self::classify(inner, None),
                        other => Self::List(vec![other]),
                    };
                }
                Self::Single(object)
            }
            Value::String(message) if message.trim().is_empty() => Self::Empty,
            Value::String(message) => Self::Error(message),
            scalar @ (Value::Bool(_) | Value::Number(_)) => Self::List(vec![scalar]),
        }
    }

    /// Wraps the payload into a record sequence. Errors yield nothing.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            Self::Single(object) => vec![Value::Object(object)],
            Self::Error(_) | Self::Empty => Vec::new(),
        }
    }

    /// Returns true for [`Payload::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Extracts an upstream error message from an object body.
#[must_use]
pub fn error_message(object: &Map<String, Value>) -> Option<String> {
    ERROR_KEYS.iter().find_map(|key| match object.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// Returns true if an upstream message describes a plan or tier restriction.
#[must_use]
pub fn is_plan_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    PLAN_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Turns a fetched response into a payload or a typed error.
///
/// - 402 and 429 map to [`FmpError::PlanRestricted`].
/// - 401 maps to [`FmpError::Api`].
/// - Any other non-2xx status maps to [`FmpError::PlanRestricted`] when its
///   message describes a plan restriction, else to [`FmpError::Api`].
/// - A 2xx body carrying an error maps to [`FmpError::PlanRestricted`] when
///   the message describes a plan restriction, else to [`FmpError::Api`].
///
/// # Errors
///
/// Returns the error the response represents.
pub fn interpret(fetched: Fetched, envelope: Option<&str>) -> Result<Payload> {
    let status = fetched.status;

    if !fetched.is_success() {
        let message = describe_failure(status, &fetched.body);
        return Err(match status {
            STATUS_PAYMENT_REQUIRED | STATUS_TOO_MANY_REQUESTS => {
                FmpError::PlanRestricted { status, message }
            }
            STATUS_UNAUTHORIZED => FmpError::Api { status, message },
            _ if is_plan_message(&message) => FmpError::PlanRestricted { status, message },
            _ => FmpError::Api { status, message },
        });
    }

    match Payload::classify(fetched.body, envelope) {
        Payload::Error(message) if is_plan_message(&message) => {
            Err(FmpError::PlanRestricted { status, message })
        }
        Payload::Error(message) => Err(FmpError::Api { status, message }),
        payload => Ok(payload),
    }
}

fn describe_failure(status: u16, body: &Value) -> String {
    match body {
        Value::Object(object) => {
            error_message(object).unwrap_or_else(|| format!("HTTP {status}: {body}"))
        }
        Value::String(text) if !text.trim().is_empty() => format!("HTTP {status}: {}", text.trim()),
        Value::Null => format!("HTTP {status}"),
        other => format!("HTTP {status}: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_shapes() {
        assert_eq!(Payload::classify(Value::Null, None), Payload::Empty);
        assert_eq!(Payload::classify(json!([]), None), Payload::Empty);
        assert_eq!(Payload::classify(json!({}), None), Payload::Empty);
        assert!(matches!(Payload::classify(json!([{"a": 1}]), None), Payload::List(v) if v.len() == 1));
        assert!(matches!(Payload::classify(json!({"symbol": "AAPL"}), None), Payload::Single(_)));
        assert_eq!(
            Payload::classify(json!("Invalid API KEY"), None),
            Payload::Error("Invalid API KEY".to_string())
        );
    }

    #[test]
    fn test_classify_error_keys() {
        for key in ERROR_KEYS {
            let body = json!({ *key: "Limit Reach" });
            assert_eq!(Payload::classify(body, None), Payload::Error("Limit Reach".to_string()));
        }
    }

    #[test]
    fn test_classify_unwraps_envelope() {
        let body = json!({"symbol": "AAPL", "historical": [{"date": "2024-01-02"}, {"date": "2024-01-03"}]});
        match Payload::classify(body, Some("historical")) {
            Payload::List(items) => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {other:?}"),
        }
        assert_eq!(
            Payload::classify(json!({"symbol": "AAPL", "historical": []}), Some("historical")),
            Payload::Empty
        );
    }

    #[test]
    fn test_single_wraps_into_one_record() {
        let records = Payload::classify(json!({"symbol": "AAPL"}), None).into_records();
        assert_eq!(records, vec![json!({"symbol": "AAPL"})]);
        assert!(Payload::Error("x".into()).into_records().is_empty());
    }

    #[test]
    fn test_interpret_status_codes() {
        let premium = interpret(Fetched::new(402, json!({"Error Message": "Premium endpoint"})), None);
        assert!(matches!(premium, Err(FmpError::PlanRestricted { status: 402, .. })));

        let limited = interpret(Fetched::new(429, Value::Null), None);
        assert!(matches!(limited, Err(ref e) if e.is_rate_limited()));

        let invalid = interpret(Fetched::new(401, json!({"Error Message": "Invalid API KEY."})), None);
        match invalid {
            Err(FmpError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API KEY.");
            }
            other => panic!("expected api error, got {other:?}"),
        }

        let broken = interpret(Fetched::new(500, json!("upstream exploded")), None);
        assert!(matches!(broken, Err(FmpError::Api { status: 500, message }) if message.contains("exploded")));
    }

    #[test]
    fn test_interpret_forbidden_plan_message() {
        let exclusive = json!({
            "Error Message": "Exclusive Endpoint : This endpoint is not available under your current subscription"
        });
        let forbidden = interpret(Fetched::new(403, exclusive.clone()), None);
        assert!(matches!(forbidden, Err(FmpError::PlanRestricted { status: 403, .. })));

        // A bad key stays an API error even when the text mentions a plan.
        let unauthorized = interpret(Fetched::new(401, exclusive), None);
        assert!(matches!(unauthorized, Err(FmpError::Api { status: 401, .. })));

        let plain = interpret(Fetched::new(403, json!({"Error Message": "Forbidden"})), None);
        assert!(matches!(plain, Err(FmpError::Api { status: 403, .. })));
    }

    #[test]
    fn test_interpret_in_band_errors() {
        let restricted = interpret(
            Fetched::new(
                200,
                json!({"Error Message": "Exclusive Endpoint : This endpoint is not available under your current subscription"}),
            ),
            None,
        );
        assert!(matches!(restricted, Err(FmpError::PlanRestricted { status: 200, .. })));

        let other = interpret(Fetched::new(200, json!({"error": "Unknown symbol"})), None);
        assert!(matches!(other, Err(FmpError::Api { status: 200, .. })));
    }

    #[test]
    fn test_interpret_passes_data_through() {
        assert_eq!(interpret(Fetched::new(200, json!([])), None).unwrap(), Payload::Empty);
        assert!(matches!(
            interpret(Fetched::new(200, json!([{"symbol": "AAPL"}])), None).unwrap(),
            Payload::List(_)
        ));
    }
}
