//! Error types for FMP operations.
//!
//! This module defines [`FmpError`], which covers every failure that leaves a
//! call without usable data. Partial failures (records that did not match
//! their schema) are not errors; see [`SchemaMismatch`](crate::SchemaMismatch).

use thiserror::Error;

/// HTTP status upstream uses for a missing or invalid API key.
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// HTTP status upstream uses for "payment required" plan restrictions.
pub const STATUS_PAYMENT_REQUIRED: u16 = 402;

/// HTTP status upstream uses when the request quota is exhausted.
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Errors that can occur while fetching or normalizing FMP data.
#[derive(Error, Debug)]
pub enum FmpError {
    /// Network-level failure (timeout, DNS, connection reset). Never retried.
    #[error("Transport error: {cause}")]
    Transport {
        /// Description of the underlying failure.
        cause: String,
    },

    /// Upstream explicitly rejected the request (bad symbol, bad key, bad parameter).
    #[error("FMP API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status of the response that carried the error.
        status: u16,
        /// Upstream message, verbatim.
        message: String,
    },

    /// The subscription tier does not allow this request (HTTP 402, 429 or a premium notice).
    #[error("Plan restricted (HTTP {status}): {message}")]
    PlanRestricted {
        /// HTTP status of the response.
        status: u16,
        /// Upstream message, verbatim.
        message: String,
    },

    /// A successful response body could not be decoded as JSON or CSV.
    #[error("Decode error: {0}")]
    Decode(String),

    /// No endpoint with this name is registered.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// A parameter was missing, unknown, or of the wrong kind.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The registry selected a schema the requested record type cannot represent.
    #[error("Schema {schema} selected for {endpoint} is not supported by the requested record type")]
    SchemaNotRegistered {
        /// Endpoint name.
        endpoint: String,
        /// Name of the selected schema.
        schema: String,
    },

    /// No API key was configured.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// Client configuration was invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FmpError {
    /// Returns true if the error means the endpoint is unavailable on this plan.
    #[must_use]
    pub const fn is_plan_restricted(&self) -> bool {
        matches!(self, Self::PlanRestricted { .. })
    }

    /// Returns true if upstream reported the request quota as exhausted.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Self::PlanRestricted {
                status: STATUS_TOO_MANY_REQUESTS,
                ..
            }
        )
    }

    /// Returns true for network-level failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Builds a transport error from any displayable cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport {
            cause: cause.to_string(),
        }
    }
}

/// Result type alias using [`FmpError`].
pub type Result<T> = std::result::Result<T, FmpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_plan_restriction() {
        let err = FmpError::PlanRestricted {
            status: STATUS_TOO_MANY_REQUESTS,
            message: "Limit Reach".to_string(),
        };
        assert!(err.is_plan_restricted());
        assert!(err.is_rate_limited());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_payment_required_is_not_rate_limit() {
        let err = FmpError::PlanRestricted {
            status: STATUS_PAYMENT_REQUIRED,
            message: "Premium Endpoint".to_string(),
        };
        assert!(err.is_plan_restricted());
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_api_error_display_keeps_message() {
        let err = FmpError::Api {
            status: 401,
            message: "Invalid API KEY. Feel free to create a Free API Key.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "FMP API error (HTTP 401): Invalid API KEY. Feel free to create a Free API Key."
        );
    }
}
