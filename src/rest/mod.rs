//! Navigation infrastructure for the Partner Center API.
//!
//! This module provides the machinery every resource family in
//! [`crate::operations`] is built from:
//!
//! - **[`Context`] and [`Field`]**: the ordered, validated scope of a node
//! - **[`Endpoint`]**: a route template rendered from a context
//! - **[`Node<K>`]**: a generic scoped node; `K` decides which methods exist
//! - **[`Retrievable`]**: nodes whose plain `get` fetches one resource
//! - **[`Query`] and [`FieldFilter`]**: listing queries and filters
//! - **[`ResourceCollection<T>`]**: a page of resources with paging metadata
//! - **[`PartnerError`] and [`ValidationError`]**: the operation error types
//!
//! # How a call flows
//!
//! ```rust,ignore
//! let availability = partner
//!     .customers()
//!     .by_id("cust-1")?        // Context: (customer_id)
//!     .products()
//!     .by_id("prod-1")?        // (customer_id, product_id)
//!     .skus()
//!     .by_id("sku-1")?         // (.., sku_id)
//!     .availabilities()
//!     .by_id("avail-1")?       // (.., availability_id)
//!     .get()                   // GET customers/cust-1/products/prod-1/skus/sku-1/availabilities/avail-1
//!     .await?;
//! ```
//!
//! Navigation methods validate their argument and return a new node without
//! any I/O. Only leaf methods such as `get` reach the network.

mod collection;
mod context;
mod errors;
mod node;
mod path;
mod query;
pub mod routes;

pub use collection::{CollectionLinks, Link, LinkHeader, ResourceAttributes, ResourceCollection};
pub use context::{Context, Field};
pub use errors::{PartnerError, ValidationError};
pub use node::{Node, NodeKind, Retrievable};
pub use path::{Endpoint, RenderedPath};
pub use query::{
    FieldFilter, FieldFilterOperation, LogicalOperator, Query, QueryKind, SeekOperation,
    SEEK_OPERATION_PARAM,
};

pub(crate) use node::{node_kind, Call};
