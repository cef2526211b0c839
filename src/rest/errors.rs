//! Error types for navigation and operation calls.
//!
//! Every operation in the SDK returns `Result<T, PartnerError>`. Local
//! precondition failures are reported as [`ValidationError`] before any
//! request leaves the process; transport failures are wrapped unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use partner_center::{PartnerError, ValidationError};
//!
//! match partner.customers().by_id("") {
//!     Err(PartnerError::Validation(ValidationError::MissingField { field })) => {
//!         println!("{field} was empty");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::rest::QueryKind;

/// A precondition that failed before any network access.
///
/// Validation errors are local, never retried, and always surfaced as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value was empty or whitespace.
    #[error("{field} must be set")]
    MissingField {
        /// The name of the missing value.
        field: &'static str,
    },

    /// A country value was not a two-letter code.
    #[error("'{value}' is not a valid country code. Expected a two-letter ISO 3166 code (e.g., 'US').")]
    InvalidCountryCode {
        /// The rejected value.
        value: String,
    },

    /// An enum argument carried its `None` sentinel.
    #[error("{field} can't be None")]
    NoneSentinel {
        /// The name of the rejected argument.
        field: &'static str,
    },

    /// The endpoint does not accept this kind of query.
    #[error("This type of query is not supported: {kind}")]
    UnsupportedQuery {
        /// The kind that was rejected.
        kind: QueryKind,
    },

    /// A numeric argument was outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// The name of the argument.
        field: &'static str,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
        /// The rejected value.
        value: i64,
    },

    /// None of the identifying filter values was set.
    #[error("At least one of {fields} must be set")]
    MissingFilter {
        /// The filter values of which one is required.
        fields: &'static str,
    },

    /// A seek was attempted without a continuation token.
    #[error("continuation token must be set")]
    EmptyContinuationToken,

    /// A context already holds a value for this field.
    #[error("{field} is already set for this resource")]
    DuplicateField {
        /// The repeated field.
        field: &'static str,
    },
}

/// Unified error type for Partner Center operations.
#[derive(Debug, Error)]
pub enum PartnerError {
    /// A local precondition failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport reported a failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A response body could not be decoded by an operation that reports
    /// decoding failures separately from transport failures.
    #[error("Could not deserialize the response of {operation}: {source}")]
    ResponseParse {
        /// The operation whose response failed to decode.
        operation: &'static str,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Could not serialize the request body of {operation}: {source}")]
    RequestSerialization {
        /// The operation whose body failed to serialize.
        operation: &'static str,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A route template did not match the context it was rendered with.
    #[error("Cannot render route '{template}': {reason}")]
    Route {
        /// The route template.
        template: &'static str,
        /// Why rendering failed.
        reason: String,
    },
}

impl From<InvalidHttpRequestError> for PartnerError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl PartnerError {
    /// Returns `true` if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the HTTP status code, if the service answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ValidationError>();
    assert_send_sync::<PartnerError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_field_message() {
        let error = ValidationError::MissingField {
            field: "customer_id",
        };
        assert_eq!(error.to_string(), "customer_id must be set");
    }

    #[test]
    fn test_unsupported_query_names_the_kind() {
        let error = ValidationError::UnsupportedQuery {
            kind: QueryKind::Seek,
        };
        assert!(error.to_string().contains("seek"));
    }

    #[test]
    fn test_out_of_range_message() {
        let error = ValidationError::OutOfRange {
            field: "page_size",
            min: 1,
            max: 300,
            value: 301,
        };
        assert_eq!(error.to_string(), "page_size must be between 1 and 300, got 301");
    }

    #[test]
    fn test_validation_converts_into_partner_error() {
        let error: PartnerError = ValidationError::EmptyContinuationToken.into();
        assert!(error.is_validation());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_http_status_is_exposed() {
        let error: PartnerError = HttpError::Response(HttpResponseError {
            code: 404,
            message: "{}".to_string(),
            error_reference: None,
        })
        .into();
        assert!(!error.is_validation());
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_response_parse_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = PartnerError::ResponseParse {
            operation: "new commerce migrations",
            source,
        };
        assert!(error.to_string().contains("new commerce migrations"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_request_maps_to_http() {
        let error: PartnerError = InvalidHttpRequestError::MissingBodyType.into();
        assert!(matches!(
            error,
            PartnerError::Http(HttpError::InvalidRequest(_))
        ));
    }
}
