//! Generic scoped navigation node.
//!
//! Every position in the resource hierarchy is a [`Node<K>`]: the root
//! [`PartnerOperations`] plus a [`Context`]. The marker type `K` implements
//! [`NodeKind`] and names the fields the node requires; it decides which
//! navigation and leaf methods are available through inherent impls on
//! `Node<K>`.
//!
//! Nodes are cheap to create and never perform I/O on construction. Leaf
//! methods build a [`Call`] from an [`Endpoint`], which renders the path and
//! query from the context and hands the request to the transport.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{
    execute_sync, DataType, FileContent, HttpError, HttpRequest, HttpResponse,
};
use crate::operations::PartnerOperations;
use crate::rest::{Context, Endpoint, Field, PartnerError, Query};

/// Describes a node type: its name and the context fields it requires.
pub trait NodeKind {
    /// The node name, used in logs.
    const NAME: &'static str;
    /// Fields that must be present in the node's context.
    const REQUIRED: &'static [Field];
}

/// A node whose plain `get` retrieves a single resource or collection.
pub trait Retrievable: NodeKind {
    /// The decoded response type.
    type Resource: DeserializeOwned + Send;
    /// The route used by `get`.
    const GET: Endpoint;
}

/// A scoped position in the resource hierarchy.
pub struct Node<K> {
    root: PartnerOperations,
    context: Context,
    kind: PhantomData<fn() -> K>,
}

impl<K: NodeKind> Node<K> {
    /// Creates a node after checking the required fields.
    pub(crate) fn new(root: PartnerOperations, context: Context) -> Result<Self, PartnerError> {
        context.require(K::REQUIRED)?;
        Ok(Self {
            root,
            context,
            kind: PhantomData,
        })
    }

    /// Creates a node without checking required fields.
    pub(crate) fn unchecked(root: PartnerOperations, context: Context) -> Self {
        Self {
            root,
            context,
            kind: PhantomData,
        }
    }

    /// Returns the node's context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns the root operations this node was created from.
    #[must_use]
    pub const fn root(&self) -> &PartnerOperations {
        &self.root
    }

    /// Creates a child node whose context is extended by `field = value`.
    pub(crate) fn child<N: NodeKind>(
        &self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<Node<N>, PartnerError> {
        let context = self.context.with(field, value)?;
        Node::new(self.root.clone(), context)
    }

    /// Creates a node of another kind over the same context.
    ///
    /// Only used where `N` requires a subset of this node's fields.
    pub(crate) fn scope<N: NodeKind>(&self) -> Node<N> {
        debug_assert!(self.context.require(N::REQUIRED).is_ok());
        Node::unchecked(self.root.clone(), self.context.clone())
    }

    /// Starts a request plan for `endpoint` rendered with this context.
    pub(crate) fn call(&self, endpoint: Endpoint) -> Call<'_> {
        Call::new(&self.root, endpoint, &self.context)
    }
}

impl<K: Retrievable> Node<K> {
    /// Retrieves the resource addressed by this node.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Http`] if the request fails or the response
    /// cannot be decoded.
    pub async fn get(&self) -> Result<K::Resource, PartnerError> {
        self.call(K::GET).send_json().await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(&self) -> Result<K::Resource, PartnerError> {
        execute_sync(self.get())
    }
}

impl<K> Clone for Node<K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            context: self.context.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: NodeKind> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// A request plan: endpoint, context, and per-call extras.
pub(crate) struct Call<'a> {
    root: &'a PartnerOperations,
    endpoint: Endpoint,
    context: &'a Context,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    accept: DataType,
    continuation_token: Option<String>,
}

impl<'a> Call<'a> {
    pub(crate) fn new(root: &'a PartnerOperations, endpoint: Endpoint, context: &'a Context) -> Self {
        Self {
            root,
            endpoint,
            context,
            query: Vec::new(),
            body: None,
            accept: DataType::Json,
            continuation_token: None,
        }
    }

    /// Appends a query parameter after the context-derived ones.
    pub(crate) fn query_param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends several query parameters.
    pub(crate) fn query(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Serializes `body` as the JSON request body.
    pub(crate) fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, PartnerError> {
        let value = serde_json::to_value(body).map_err(|source| {
            PartnerError::RequestSerialization {
                operation: self.endpoint.name,
                source,
            }
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Applies a listing query: its parameters, and for a seek its
    /// continuation token.
    pub(crate) fn listing(self, query: &Query) -> Result<Self, PartnerError> {
        let token = query.continuation_token()?;
        let params = query.to_query_params()?;
        Ok(self.continuation_token(token).query(params))
    }

    /// Sends the continuation token out of band.
    pub(crate) fn continuation_token(mut self, token: Option<&str>) -> Self {
        self.continuation_token = token.map(String::from);
        self
    }

    /// Sets the expected response media type.
    pub(crate) fn accept(mut self, accept: DataType) -> Self {
        self.accept = accept;
        self
    }

    fn build(self) -> Result<(HttpRequest, &'a PartnerOperations), PartnerError> {
        let rendered = self.endpoint.render(self.context)?;

        let mut builder = HttpRequest::builder(self.endpoint.method, rendered.path)
            .query(rendered.query)
            .query(self.query)
            .accept(self.accept)
            .tries(self.root.config().tries());
        if let Some(body) = self.body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        if let Some(token) = self.continuation_token {
            builder = builder.continuation_token(token);
        }

        Ok((builder.build()?, self.root))
    }

    /// Sends the request and decodes the response body.
    ///
    /// Decoding failures surface as [`HttpError::Deserialization`].
    pub(crate) async fn send_json<T: DeserializeOwned>(self) -> Result<T, PartnerError> {
        let (path, response) = self.dispatch().await?;
        serde_json::from_value(response.body)
            .map_err(|source| PartnerError::Http(HttpError::Deserialization { path, source }))
    }

    /// Sends the request and decodes the response body, reporting any
    /// decoding failure as [`PartnerError::ResponseParse`].
    pub(crate) async fn send_parsed<T: DeserializeOwned>(self) -> Result<T, PartnerError> {
        let operation = self.endpoint.name;
        let parse_error = |source: serde_json::Error| {
            tracing::debug!(operation, error = %source, "Response body failed to decode");
            PartnerError::ResponseParse { operation, source }
        };

        match self.dispatch().await {
            Ok((_, response)) => serde_json::from_value(response.body).map_err(parse_error),
            Err(PartnerError::Http(HttpError::Deserialization { source, .. })) => {
                Err(parse_error(source))
            }
            Err(e) => Err(e),
        }
    }

    /// Sends the request and returns only the status and headers.
    pub(crate) async fn send_headers(self) -> Result<HttpResponse, PartnerError> {
        let name = self.endpoint.name;
        let (request, root) = self.build()?;
        tracing::debug!(
            operation = name,
            method = %request.http_method,
            path = %request.path,
            "Dispatching Partner Center operation"
        );
        Ok(root
            .http_client()
            .request_headers(request, root.request_context())
            .await?)
    }

    /// Sends the request and returns the response body as a file.
    pub(crate) async fn send_file(self) -> Result<FileContent, PartnerError> {
        let name = self.endpoint.name;
        let (request, root) = self.accept(DataType::Pdf).build()?;
        tracing::debug!(
            operation = name,
            path = %request.path,
            "Downloading Partner Center document"
        );
        Ok(root
            .http_client()
            .request_bytes(request, root.request_context())
            .await?)
    }

    async fn dispatch(self) -> Result<(String, HttpResponse), PartnerError> {
        let name = self.endpoint.name;
        let (request, root) = self.build()?;
        let path = request.path.clone();
        tracing::debug!(
            operation = name,
            method = %request.http_method,
            path = %path,
            "Dispatching Partner Center operation"
        );
        let response = root
            .http_client()
            .request(request, root.request_context())
            .await?;
        Ok((path, response))
    }
}

/// Declares a node kind marker, its public type alias, and optionally its
/// plain `get` route.
///
/// ```rust,ignore
/// node_kind! {
///     /// A single customer.
///     CustomerKind => CustomerOperations [CustomerId]
///     get Customer = routes::GET_CUSTOMER
/// }
/// ```
macro_rules! node_kind {
    (
        $(#[$meta:meta])*
        $kind:ident => $alias:ident [$($field:ident),* $(,)?]
        $(get $resource:ty = $route:path)?
    ) => {
        #[doc = concat!("Marker for [`", stringify!($alias), "`].")]
        #[derive(Debug, Clone, Copy)]
        pub enum $kind {}

        impl $crate::rest::NodeKind for $kind {
            const NAME: &'static str = stringify!($alias);
            const REQUIRED: &'static [$crate::rest::Field] = &[$($crate::rest::Field::$field),*];
        }

        $(
            impl $crate::rest::Retrievable for $kind {
                type Resource = $resource;
                const GET: $crate::rest::Endpoint = $route;
            }
        )?

        $(#[$meta])*
        pub type $alias = $crate::rest::Node<$kind>;
    };
}

pub(crate) use node_kind;
