//! # Partner Center Rust SDK
//!
//! A Rust SDK for the Partner Center commerce and provisioning REST API,
//! covering customers, the product catalog, invoices, subscriptions,
//! entitlements and new-commerce migrations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PartnerConfig`] and [`PartnerConfigBuilder`]
//! - Validated newtypes for credentials and domain values
//! - A fluent, strongly-typed navigation surface rooted at [`PartnerOperations`]
//! - Async operations with blocking (`*_blocking`) counterparts
//! - An HTTP transport with retry on throttling and server errors
//! - Continuation-token paging via [`ResourceCollection`]
//!
//! ## Quick Start
//!
//! ```rust
//! use partner_center::{AccessToken, PartnerConfig, PartnerCredentials};
//!
//! let config = PartnerConfig::builder()
//!     .credentials(PartnerCredentials::new(
//!         AccessToken::new("your-access-token").unwrap(),
//!         None,
//!     ))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Navigating Resources
//!
//! Navigation methods validate their argument and return a new node without
//! any network access. Only leaf methods such as `get` send a request.
//!
//! ```rust,ignore
//! use partner_center::PartnerOperations;
//!
//! let partner = PartnerOperations::new(config)?;
//!
//! // GET customers/{customer_id}/products/{product_id}/skus?reservationScope=AzurePlan
//! let skus = partner
//!     .customers()
//!     .by_id("cust-1")?
//!     .products()
//!     .by_id("DZH318Z0BQ3Q")?
//!     .skus()
//!     .by_reservation_scope("AzurePlan")?
//!     .get()
//!     .await?;
//!
//! // Blocking call from synchronous code
//! let customer = partner.customers().by_id("cust-1")?.get_blocking()?;
//! ```
//!
//! ## Paging
//!
//! ```rust,ignore
//! use partner_center::{Query, SeekOperation};
//!
//! let customers = partner.customers();
//! let mut page = customers.query(&Query::indexed(100, 0)).await?;
//! while let Some(token) = page.continuation_token().map(str::to_owned) {
//!     page = customers.seek(&token, SeekOperation::Next).await?;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Navigation arguments are checked before any I/O
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Immutable nodes**: Every navigation step returns a new node

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::PartnerCredentials;
pub use config::{
    AccessToken, ApiVersion, BaseUrl, CountryCode, Locale, PartnerConfig, PartnerConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, FileContent, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    RequestContext,
};

// Re-export navigation types
pub use operations::PartnerOperations;
pub use rest::{
    FieldFilter, FieldFilterOperation, LogicalOperator, PartnerError, Query, QueryKind,
    ResourceCollection, SeekOperation, ValidationError,
};
