//! HTTP client for Partner Center API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Partner Center API with automatic retry handling.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{FileContent, HttpResponse};
use crate::clients::request_context::RequestContext;
use crate::config::PartnerConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the continuation token of a seek request.
pub const CONTINUATION_TOKEN_HEADER: &str = "MS-ContinuationToken";

/// HTTP client for making requests to the Partner Center API.
///
/// The client handles:
/// - Base URI construction from the configured service root and API version
/// - Default headers including authorization, locale and user agent
/// - Correlation and request id headers
/// - Automatic retry logic for 429 and 500 responses
///
/// # Thread Safety
///
/// `HttpClient` is `Clone + Send + Sync`; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.partnercenter.microsoft.com`).
    base_uri: String,
    /// Base path (e.g., "/v1").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

/// Raw outcome of a successful attempt, before body decoding.
struct RawResponse {
    code: u16,
    headers: HashMap<String, Vec<String>>,
    bytes: Vec<u8>,
}

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &PartnerConfig) -> Result<Self, HttpError> {
        let base_uri = config.base_url().as_ref().to_string();
        let base_path = format!("/{}", config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Partner Center Rust SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Authorization".to_string(),
            config.credentials().authorization_header(),
        );
        default_headers.insert("X-Locale".to_string(), config.locale().as_ref().to_string());
        default_headers.insert(
            "MS-PartnerCenter-Client".to_string(),
            format!("Partner Center Rust SDK v{SDK_VERSION}"),
        );
        if let Some(name) = config.application_name() {
            default_headers.insert("MS-PartnerCenter-Application".to_string(), name.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and parses the response body as JSON.
    ///
    /// An empty body is returned as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    /// - The success body is not JSON (`Deserialization`)
    pub async fn request(
        &self,
        request: HttpRequest,
        context: &RequestContext,
    ) -> Result<HttpResponse, HttpError> {
        let path = request.path.clone();
        let raw = self.dispatch(request, context).await?;

        let body = if raw.bytes.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_slice(&raw.bytes)
                .map_err(|source| HttpError::Deserialization { path, source })?
        };

        Ok(HttpResponse::new(raw.code, raw.headers, body))
    }

    /// Sends a request and returns the raw response bytes.
    ///
    /// Used by document endpoints that answer with a file rather than JSON.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::request`], except the body is never decoded.
    pub async fn request_bytes(
        &self,
        request: HttpRequest,
        context: &RequestContext,
    ) -> Result<FileContent, HttpError> {
        let raw = self.dispatch(request, context).await?;
        let content_type = raw
            .headers
            .get("content-type")
            .and_then(|values| values.first())
            .cloned();

        Ok(FileContent {
            content_type,
            bytes: raw.bytes,
        })
    }

    /// Sends a request and keeps only the status and headers.
    ///
    /// The success body is discarded without being decoded, so any payload
    /// is accepted. The returned body is `null`.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::request`], except `Deserialization`.
    pub async fn request_headers(
        &self,
        request: HttpRequest,
        context: &RequestContext,
    ) -> Result<HttpResponse, HttpError> {
        let raw = self.dispatch(request, context).await?;
        Ok(HttpResponse::new(
            raw.code,
            raw.headers,
            serde_json::Value::Null,
        ))
    }

    /// Runs the retry loop and returns the first successful response.
    async fn dispatch(
        &self,
        request: HttpRequest,
        context: &RequestContext,
    ) -> Result<RawResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        headers.insert(
            "Accept".to_string(),
            request.accept.as_content_type().to_string(),
        );
        headers.insert(
            "MS-CorrelationId".to_string(),
            context.correlation_id().to_string(),
        );
        if let Some(locale) = context.locale() {
            headers.insert("X-Locale".to_string(), locale.as_ref().to_string());
        }
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(token) = &request.continuation_token {
            headers.insert(CONTINUATION_TOKEN_HEADER.to_string(), token.clone());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Patch => self.client.patch(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            req_builder = req_builder.header("MS-RequestId", context.next_request_id().to_string());

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "Sending Partner Center request"
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let bytes = res.bytes().await?.to_vec();

            if (200..=299).contains(&code) {
                return Ok(RawResponse {
                    code,
                    headers: res_headers,
                    bytes,
                });
            }

            let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                if bytes.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::json!({ "raw_body": String::from_utf8_lossy(&bytes) })
                }
            });
            let response = HttpResponse::new(code, res_headers, body);
            let error_message = Self::serialize_error(&response);
            let error_reference = response
                .request_id()
                .or_else(|| response.correlation_id())
                .map(String::from);

            let should_retry = code == 429 || code == 500;
            if !should_retry || tries >= request.tries {
                if !should_retry || request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        error_reference,
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                path = %request.path,
                status = code,
                attempt = tries,
                "Retrying Partner Center request after {:?}",
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|seconds| std::time::Duration::try_from_secs_f64(seconds).ok())
            {
                return delay;
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes the Partner Center error payload to a JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["code", "description", "errorName", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
