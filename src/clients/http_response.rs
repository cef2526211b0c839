//! HTTP response types for the Partner Center SDK.
//!
//! This module provides [`HttpResponse`] for JSON payloads and
//! [`FileContent`] for binary downloads such as invoice statements.

use std::collections::HashMap;

/// An HTTP response from the Partner Center API.
///
/// Header names are stored lower-cased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    ///
    /// Only finite, non-negative `Retry-After` values are kept.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `MS-RequestId` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("ms-requestid")
    }

    /// Returns the `MS-CorrelationId` header value, if present.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.header("ms-correlationid")
    }

    /// Returns the `Location` header value, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }
}

/// A binary payload returned by a file endpoint.
///
/// Statement endpoints answer with `application/pdf`; the bytes are returned
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileContent {
    /// The `Content-Type` reported by the service, if any.
    pub content_type: Option<String>,
    /// The raw file bytes.
    pub bytes: Vec<u8>,
}

impl FileContent {
    /// Returns the payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the service labelled the payload as PDF.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/pdf"))
    }

    /// Consumes the payload and returns the bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for FileContent {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 429, 500, 503] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_after_rejects_unusable_values() {
        for value in ["-1", "inf", "NaN", "-0.5", "soon"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);

            let response = HttpResponse::new(429, headers, json!({}));
            assert_eq!(response.retry_request_after, None, "value {value}");
        }
    }

    #[test]
    fn test_partner_center_header_extraction() {
        let mut headers = HashMap::new();
        headers.insert("ms-requestid".to_string(), vec!["req-1".to_string()]);
        headers.insert("ms-correlationid".to_string(), vec!["corr-1".to_string()]);
        headers.insert(
            "location".to_string(),
            vec!["/customers/c/subscriptions/s/registrationstatus".to_string()],
        );

        let response = HttpResponse::new(202, headers, json!({}));
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.correlation_id(), Some("corr-1"));
        assert_eq!(
            response.location(),
            Some("/customers/c/subscriptions/s/registrationstatus")
        );
        assert_eq!(response.header("MS-RequestId"), Some("req-1"));
    }

    #[test]
    fn test_file_content_helpers() {
        let file = FileContent {
            content_type: Some("application/pdf".to_string()),
            bytes: b"%PDF-1.7".to_vec(),
        };
        assert!(file.is_pdf());
        assert_eq!(file.len(), 8);
        assert!(!file.is_empty());
        assert_eq!(file.as_ref(), b"%PDF-1.7");
    }
}
