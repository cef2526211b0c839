//! Path building for Partner Center endpoints.
//!
//! Every operation resolves exactly one [`Endpoint`]: an HTTP method plus a
//! route template with `{placeholder}` segments. Rendering an endpoint with a
//! [`Context`] substitutes the placeholders from the context and sends every
//! remaining context field as a query parameter.
//!
//! # Example
//!
//! ```rust
//! use partner_center::rest::{Context, Endpoint, Field};
//! use partner_center::HttpMethod;
//!
//! const GET_SKUS: Endpoint = Endpoint::new(
//!     "GetSkus",
//!     HttpMethod::Get,
//!     "products/{product_id}/skus",
//! );
//!
//! let context = Context::new()
//!     .with(Field::ProductId, "DZH318Z0BQ3Q").unwrap()
//!     .with(Field::Country, "US").unwrap()
//!     .with(Field::TargetSegment, "commercial").unwrap();
//!
//! let rendered = GET_SKUS.render(&context).unwrap();
//! assert_eq!(rendered.path, "products/DZH318Z0BQ3Q/skus");
//! assert_eq!(
//!     rendered.query,
//!     vec![
//!         ("country".to_string(), "US".to_string()),
//!         ("targetSegment".to_string(), "commercial".to_string()),
//!     ]
//! );
//! ```

use crate::clients::HttpMethod;
use crate::rest::{Context, Field, PartnerError};

/// A route: operation name, HTTP method, and path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// The operation name, used in logs and error messages.
    pub name: &'static str,
    /// The HTTP method for this route.
    pub method: HttpMethod,
    /// The path template with `{field}` placeholders.
    pub template: &'static str,
}

/// A rendered path and the query parameters derived from the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPath {
    /// The path relative to the API version root.
    pub path: String,
    /// Context fields not consumed by the template, in context order.
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    /// Creates a new `Endpoint`.
    ///
    /// This is a `const fn` to allow routes to be defined as constants.
    #[must_use]
    pub const fn new(name: &'static str, method: HttpMethod, template: &'static str) -> Self {
        Self {
            name,
            method,
            template,
        }
    }

    /// Renders this endpoint for a context.
    ///
    /// Placeholder values are percent-encoded. Context fields that the
    /// template does not consume are returned as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Route`] if a placeholder has no value in the
    /// context, a placeholder is not closed, or an unconsumed field has no
    /// query parameter name.
    pub fn render(&self, context: &Context) -> Result<RenderedPath, PartnerError> {
        let mut consumed: Vec<Field> = Vec::new();
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| self.route_error("unclosed placeholder"))?;
            let name = &after[..end];

            let (field, value) = context
                .iter()
                .find(|(field, _)| field.as_str() == name)
                .ok_or_else(|| self.route_error(format!("no value for placeholder '{name}'")))?;

            path.push_str(&urlencoding::encode(value));
            consumed.push(field);
            rest = &after[end + 1..];
        }
        path.push_str(rest);

        let mut query = Vec::new();
        for (field, value) in context.iter() {
            if consumed.contains(&field) {
                continue;
            }
            let key = field.query_name().ok_or_else(|| {
                self.route_error(format!("field '{field}' is neither in the path nor a query parameter"))
            })?;
            query.push((key.to_string(), value.to_string()));
        }

        Ok(RenderedPath { path, query })
    }

    fn route_error(&self, reason: impl Into<String>) -> PartnerError {
        PartnerError::Route {
            template: self.template,
            reason: reason.into(),
        }
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint>();
    assert_send_sync::<RenderedPath>();
};
