//! The [`Record`] trait connecting schemas to typed Rust values.

use serde_json::{Map, Value};

use crate::schema::Schema;

/// Untyped record: the coerced field map produced by [`Schema::validate`].
pub type Fields = Map<String, Value>;

/// A typed value built from a record that passed schema validation.
///
/// Most record types correspond to exactly one schema. Types that represent
/// a response multiplexed by asset class list every schema they can be built
/// from and branch on the schema chosen by the dispatcher.
pub trait Record: Sized + Send + 'static {
    /// Schemas this type can be built from.
    const SCHEMAS: &'static [&'static Schema];

    /// Builds the value from a coerced field map.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the map does not fit the type.
    fn from_fields(schema: &'static Schema, fields: Fields) -> serde_json::Result<Self>;

    /// Returns true if this type can be built from records of `schema`.
    #[must_use]
    fn supports(schema: &Schema) -> bool {
        Self::SCHEMAS.iter().any(|s| s.name == schema.name)
    }
}

/// The untyped field map can represent every schema.
impl Record for Fields {
    const SCHEMAS: &'static [&'static Schema] = &[];

    fn from_fields(_schema: &'static Schema, fields: Fields) -> serde_json::Result<Self> {
        Ok(fields)
    }

    fn supports(_schema: &Schema) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSpec};
    use serde::Deserialize;
    use serde_json::json;

    const TICKER: Schema = Schema {
        name: "test-ticker",
        fields: &[FieldSpec::required("symbol", FieldKind::Text)],
    };

    const OTHER: Schema = Schema {
        name: "test-other",
        fields: &[],
    };

    #[derive(Debug, Deserialize)]
    struct Ticker {
        symbol: String,
    }

    impl Record for Ticker {
        const SCHEMAS: &'static [&'static Schema] = &[&TICKER];

        fn from_fields(_schema: &'static Schema, fields: Fields) -> serde_json::Result<Self> {
            serde_json::from_value(Value::Object(fields))
        }
    }

    #[test]
    fn test_typed_record_supports_own_schema_only() {
        assert!(Ticker::supports(&TICKER));
        assert!(!Ticker::supports(&OTHER));
        assert!(Fields::supports(&OTHER));
    }

    #[test]
    fn test_from_validated_fields() {
        let fields = TICKER.validate(&json!({"symbol": 42})).unwrap();
        let ticker = Ticker::from_fields(&TICKER, fields).unwrap();
        assert_eq!(ticker.symbol, "42");
    }
}
