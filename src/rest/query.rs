//! Query descriptors for listing operations.
//!
//! A [`Query`] is one of four kinds:
//!
//! - [`Query::All`]: no constraints
//! - [`Query::Indexed`]: an explicit page size and start offset
//! - [`Query::Simple`]: a [`FieldFilter`] predicate
//! - [`Query::Seek`]: a continuation token returned by a previous page
//!
//! Endpoints that accept only some kinds reject the others with
//! [`ValidationError::UnsupportedQuery`].
//!
//! # Example
//!
//! ```rust
//! use partner_center::rest::{FieldFilter, FieldFilterOperation, Query, QueryKind};
//!
//! let filter = FieldFilter::or(vec![
//!     FieldFilter::field("CompanyName", FieldFilterOperation::StartsWith, "Contoso"),
//!     FieldFilter::field("Domain", FieldFilterOperation::StartsWith, "contoso"),
//! ]);
//! let query = Query::simple(filter);
//!
//! assert_eq!(query.kind(), QueryKind::Simple);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rest::{PartnerError, ValidationError};

/// Name of the query parameter carrying the seek direction.
pub const SEEK_OPERATION_PARAM: &str = "seekOperation";

/// The kind of a [`Query`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Unconstrained listing.
    All,
    /// Page size and offset.
    Indexed,
    /// Field filter.
    Simple,
    /// Continuation of a previous page.
    Seek,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Indexed => write!(f, "indexed"),
            Self::Simple => write!(f, "simple"),
            Self::Seek => write!(f, "seek"),
        }
    }
}

/// Direction of a seek. Only forward paging is supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeekOperation {
    /// Fetch the page after the token.
    #[default]
    Next,
}

impl SeekOperation {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "Next",
        }
    }
}

/// Comparison applied by a single-field filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFilterOperation {
    /// `field == value`.
    Equals,
    /// `field != value`.
    NotEquals,
    /// `field > value`.
    GreaterThan,
    /// `field >= value`.
    GreaterThanOrEquals,
    /// `field < value`.
    LessThan,
    /// `field <= value`.
    LessThanOrEquals,
    /// The field contains the value.
    Substring,
    /// The field starts with the value.
    StartsWith,
}

/// Combinator for compound filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    /// Every filter must match.
    And,
    /// At least one filter must match.
    Or,
}

/// A filter predicate, serialized as JSON into the `filter` query parameter.
///
/// A single-field filter renders as `{"Field":..,"Value":..,"Operator":..}`;
/// a compound filter as `{"Filters":[..],"Operator":"and"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldFilter {
    /// A comparison on one field.
    Field {
        /// The field name, as the service spells it.
        #[serde(rename = "Field")]
        field: String,
        /// The value to compare against.
        #[serde(rename = "Value")]
        value: serde_json::Value,
        /// The comparison.
        #[serde(rename = "Operator")]
        operator: FieldFilterOperation,
    },
    /// A combination of nested filters.
    Compound {
        /// The nested filters.
        #[serde(rename = "Filters")]
        filters: Vec<FieldFilter>,
        /// How the nested filters combine.
        #[serde(rename = "Operator")]
        operator: LogicalOperator,
    },
}

impl FieldFilter {
    /// Creates a single-field filter.
    #[must_use]
    pub fn field(
        field: impl Into<String>,
        operator: FieldFilterOperation,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self::Field {
            field: field.into(),
            value: value.into(),
            operator,
        }
    }

    /// Combines filters so that all must match.
    #[must_use]
    pub fn and(filters: Vec<Self>) -> Self {
        Self::Compound {
            filters,
            operator: LogicalOperator::And,
        }
    }

    /// Combines filters so that any may match.
    #[must_use]
    pub fn or(filters: Vec<Self>) -> Self {
        Self::Compound {
            filters,
            operator: LogicalOperator::Or,
        }
    }

    /// Serializes the filter as the JSON carried in the query string.
    ///
    /// # Errors
    ///
    /// Returns the serialization error, which can only occur for values
    /// that JSON cannot represent.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A listing query.
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    /// No constraints.
    All,
    /// A page of `page_size` items starting at `index`.
    Indexed {
        /// Number of items per page.
        page_size: u32,
        /// Zero-based start offset.
        index: u32,
    },
    /// A filtered listing.
    Simple {
        /// The filter predicate.
        filter: FieldFilter,
    },
    /// The page following a continuation token.
    Seek {
        /// The token from the previous page.
        token: String,
        /// The direction.
        operation: SeekOperation,
    },
}

impl Query {
    /// An unconstrained query.
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// An indexed query.
    #[must_use]
    pub const fn indexed(page_size: u32, index: u32) -> Self {
        Self::Indexed { page_size, index }
    }

    /// A filtered query.
    #[must_use]
    pub const fn simple(filter: FieldFilter) -> Self {
        Self::Simple { filter }
    }

    /// A seek query.
    #[must_use]
    pub fn seek(token: impl Into<String>, operation: SeekOperation) -> Self {
        Self::Seek {
            token: token.into(),
            operation,
        }
    }

    /// Returns the kind of this query.
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        match self {
            Self::All => QueryKind::All,
            Self::Indexed { .. } => QueryKind::Indexed,
            Self::Simple { .. } => QueryKind::Simple,
            Self::Seek { .. } => QueryKind::Seek,
        }
    }

    /// Fails unless this query's kind is one of `accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedQuery`] naming the rejected kind.
    pub fn ensure_kind(&self, accepted: &[QueryKind]) -> Result<(), ValidationError> {
        let kind = self.kind();
        if accepted.contains(&kind) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedQuery { kind })
        }
    }

    /// Returns the continuation token of a seek query.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyContinuationToken`] for a seek query
    /// with an empty or whitespace token.
    pub fn continuation_token(&self) -> Result<Option<&str>, ValidationError> {
        match self {
            Self::Seek { token, .. } if token.trim().is_empty() => {
                Err(ValidationError::EmptyContinuationToken)
            }
            Self::Seek { token, .. } => Ok(Some(token)),
            _ => Ok(None),
        }
    }

    /// Translates the query into query parameters.
    ///
    /// - indexed: `size` and `offset`
    /// - simple: `filter` (JSON)
    /// - seek: `seekOperation`; the token itself travels as a header
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] for a seek without a token and
    /// [`PartnerError::RequestSerialization`] if the filter cannot be
    /// serialized.
    pub fn to_query_params(&self) -> Result<Vec<(String, String)>, PartnerError> {
        self.continuation_token()?;

        let params = match self {
            Self::All => Vec::new(),
            Self::Indexed { page_size, index } => vec![
                ("size".to_string(), page_size.to_string()),
                ("offset".to_string(), index.to_string()),
            ],
            Self::Simple { filter } => {
                let json = filter
                    .to_json()
                    .map_err(|source| PartnerError::RequestSerialization {
                        operation: "query filter",
                        source,
                    })?;
                vec![("filter".to_string(), json)]
            }
            Self::Seek { operation, .. } => vec![(
                SEEK_OPERATION_PARAM.to_string(),
                operation.as_str().to_string(),
            )],
        };

        Ok(params)
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Query>();
    assert_send_sync::<FieldFilter>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_kind_display() {
        assert_eq!(QueryKind::All.to_string(), "all");
        assert_eq!(QueryKind::Indexed.to_string(), "indexed");
        assert_eq!(QueryKind::Simple.to_string(), "simple");
        assert_eq!(QueryKind::Seek.to_string(), "seek");
    }

    #[test]
    fn test_single_field_filter_serialization() {
        let filter = FieldFilter::field("Domain", FieldFilterOperation::StartsWith, "contoso");
        let value: serde_json::Value = serde_json::from_str(&filter.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({"Field": "Domain", "Value": "contoso", "Operator": "starts_with"})
        );
    }

    #[test]
    fn test_compound_filter_serialization() {
        let filter = FieldFilter::and(vec![
            FieldFilter::field("InvoiceDate", FieldFilterOperation::GreaterThanOrEquals, "2024-01-01"),
            FieldFilter::field("TotalCharges", FieldFilterOperation::NotEquals, 0),
        ]);
        let value: serde_json::Value = serde_json::from_str(&filter.to_json().unwrap()).unwrap();

        assert_eq!(value["Operator"], "and");
        assert_eq!(value["Filters"][0]["Operator"], "greater_than_or_equals");
        assert_eq!(value["Filters"][1]["Value"], 0);
    }

    #[test]
    fn test_indexed_query_params() {
        let params = Query::indexed(20, 40).to_query_params().unwrap();
        assert_eq!(
            params,
            vec![
                ("size".to_string(), "20".to_string()),
                ("offset".to_string(), "40".to_string()),
            ]
        );
    }

    #[test]
    fn test_seek_query_params_exclude_token() {
        let query = Query::seek("token-123", SeekOperation::Next);
        let params = query.to_query_params().unwrap();

        assert_eq!(params, vec![("seekOperation".to_string(), "Next".to_string())]);
        assert_eq!(query.continuation_token().unwrap(), Some("token-123"));
    }

    #[test]
    fn test_seek_with_empty_token_is_rejected() {
        let query = Query::seek("  ", SeekOperation::Next);
        assert_eq!(
            query.continuation_token(),
            Err(ValidationError::EmptyContinuationToken)
        );
        assert!(matches!(
            query.to_query_params(),
            Err(PartnerError::Validation(ValidationError::EmptyContinuationToken))
        ));
    }

    #[test]
    fn test_ensure_kind() {
        let accepted = [QueryKind::Indexed, QueryKind::Simple];
        assert!(Query::indexed(10, 0).ensure_kind(&accepted).is_ok());
        assert_eq!(
            Query::all().ensure_kind(&accepted),
            Err(ValidationError::UnsupportedQuery {
                kind: QueryKind::All
            })
        );
    }
}
