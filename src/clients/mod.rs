//! HTTP client types for Partner Center API communication.
//!
//! This module provides the transport layer used by every operation in
//! [`crate::operations`]. It handles request construction, default headers,
//! retry logic, and Partner Center specific error parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed JSON response from the API
//! - [`FileContent`]: A binary response such as a PDF statement
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`DataType`]: Media types for request bodies and `Accept`
//! - [`RequestContext`]: Correlation id and locale override for a call chain
//! - [`execute_sync`]: The blocking adapter behind every `*_blocking` method
//!
//! # Example
//!
//! ```rust,ignore
//! use partner_center::clients::{HttpClient, HttpMethod, HttpRequest, RequestContext};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "customers")
//!     .query_param("size", "20")
//!     .build()?;
//!
//! let response = client.request(request, &RequestContext::new()).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`PartnerConfigBuilder::tries`](crate::PartnerConfigBuilder::tries).

mod blocking;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod request_context;

pub use blocking::execute_sync;
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, CONTINUATION_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{FileContent, HttpResponse};
pub use request_context::RequestContext;
