//! Paged collection wrapper.
//!
//! Listing endpoints answer with the same envelope: a total count, the items
//! of the current page, navigation links, and an optional continuation token.
//! [`ResourceCollection<T>`] implements `Deref<Target = Vec<T>>` so the page
//! can be iterated directly.
//!
//! A collection is a snapshot. Fetching the next page is an explicit seek
//! with [`ResourceCollection::continuation_token`].

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::clients::CONTINUATION_TOKEN_HEADER;

/// A header carried by a navigation link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkHeader {
    /// The header name.
    pub key: String,
    /// The header value.
    pub value: String,
}

/// A navigation link returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Link {
    /// The link target, relative to the API root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// The HTTP method to use with the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Headers the request must carry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<LinkHeader>,
}

impl Link {
    /// Returns the value of a link header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.key.eq_ignore_ascii_case(key))
            .map(|header| header.value.as_str())
    }
}

/// Links attached to a collection page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionLinks {
    /// The link to the current page.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    /// The link to the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    /// The link to the previous page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
}

/// Object metadata returned with every resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAttributes {
    /// The service-side type name, such as `Customer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    /// The entity tag used for optimistic concurrency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

/// A page of resources plus paging metadata.
///
/// # Example
///
/// ```rust
/// use partner_center::rest::ResourceCollection;
/// use serde_json::json;
///
/// let page: ResourceCollection<String> = serde_json::from_value(json!({
///     "totalCount": 2,
///     "items": ["a", "b"],
///     "links": {
///         "next": {
///             "uri": "/customers?size=2",
///             "method": "GET",
///             "headers": [{"key": "MS-ContinuationToken", "value": "token-1"}]
///         }
///     }
/// }))
/// .unwrap();
///
/// assert_eq!(page.len(), 2);
/// assert!(page.has_next_page());
/// assert_eq!(page.continuation_token(), Some("token-1"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCollection<T> {
    /// Number of items in this page, as reported by the service.
    #[serde(default)]
    pub total_count: u64,

    /// The items of this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Navigation links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CollectionLinks>,

    /// Continuation token returned in the body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    /// Object metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

impl<T> ResourceCollection<T> {
    /// Returns the `next` link, if any.
    #[must_use]
    pub fn next_link(&self) -> Option<&Link> {
        self.links.as_ref().and_then(|links| links.next.as_ref())
    }

    /// Returns `true` if the service reported a following page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.continuation_token().is_some()
    }

    /// Returns the token to seek the next page with.
    ///
    /// The body-level token takes precedence; otherwise the
    /// `MS-ContinuationToken` header of the `next` link is used.
    #[must_use]
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .or_else(|| {
                self.next_link()
                    .and_then(|link| link.header(CONTINUATION_TOKEN_HEADER))
            })
    }

    /// Consumes the collection and returns the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for ResourceCollection<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for ResourceCollection<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> IntoIterator for ResourceCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_minimal_envelope() {
        let page: ResourceCollection<u32> =
            serde_json::from_value(json!({"totalCount": 0, "items": []})).unwrap();

        assert!(page.is_empty());
        assert!(!page.has_next_page());
        assert!(page.continuation_token().is_none());
    }

    #[test]
    fn test_missing_items_default_to_empty() {
        let page: ResourceCollection<u32> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_body_token_takes_precedence_over_link_header() {
        let page: ResourceCollection<u32> = serde_json::from_value(json!({
            "items": [1],
            "continuationToken": "from-body",
            "links": {"next": {"headers": [{"key": "MS-ContinuationToken", "value": "from-link"}]}}
        }))
        .unwrap();

        assert_eq!(page.continuation_token(), Some("from-body"));
    }

    #[test]
    fn test_link_header_lookup_is_case_insensitive() {
        let link = Link {
            uri: Some("/invoices".to_string()),
            method: Some("GET".to_string()),
            headers: vec![LinkHeader {
                key: "ms-continuationtoken".to_string(),
                value: "t".to_string(),
            }],
        };
        assert_eq!(link.header("MS-ContinuationToken"), Some("t"));
    }

    #[test]
    fn test_attributes_and_iteration() {
        let page: ResourceCollection<String> = serde_json::from_value(json!({
            "totalCount": 2,
            "items": ["x", "y"],
            "attributes": {"objectType": "Collection"}
        }))
        .unwrap();

        assert_eq!(
            page.attributes.as_ref().and_then(|a| a.object_type.as_deref()),
            Some("Collection")
        );
        let items: Vec<String> = page.into_iter().collect();
        assert_eq!(items, vec!["x".to_string(), "y".to_string()]);
    }
}
