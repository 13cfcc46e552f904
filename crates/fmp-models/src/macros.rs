//! Declaration macro for record structs.

/// Maps an optional `optional` marker onto a [`Presence`](fmp_core::Presence).
macro_rules! presence {
    () => {
        ::fmp_core::Presence::Required
    };
    (optional) => {
        ::fmp_core::Presence::Optional
    };
}

/// Declares a record struct together with its schema.
///
/// ```ignore
/// record! {
///     /// A split.
///     pub struct Split as "split" {
///         /// Ticker.
///         symbol: String = "symbol" => Text;
///         /// Ex-date.
///         date: NaiveDate = "date" => Date;
///         /// Old share count.
///         denominator: Option<f64> = "denominator" => Number, optional;
///     }
/// }
/// ```
///
/// Each field names its Rust type, wire name and [`FieldKind`](fmp_core::FieldKind).
/// Optional fields must use an `Option` type.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $schema:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $wire:literal => $kind:ident $(, $presence:ident)? ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire)]
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Schema records of this type are validated against.
            pub const SCHEMA: ::fmp_core::Schema = ::fmp_core::Schema {
                name: $schema,
                fields: &[
                    $(
                        ::fmp_core::FieldSpec {
                            name: $wire,
                            kind: ::fmp_core::FieldKind::$kind,
                            presence: presence!($($presence)?),
                        },
                    )*
                ],
            };
        }

        impl ::fmp_core::Record for $name {
            const SCHEMAS: &'static [&'static ::fmp_core::Schema] = &[&Self::SCHEMA];

            fn from_fields(
                _schema: &'static ::fmp_core::Schema,
                fields: ::fmp_core::Fields,
            ) -> ::serde_json::Result<Self> {
                ::serde_json::from_value(::serde_json::Value::Object(fields))
            }
        }
    };
}
