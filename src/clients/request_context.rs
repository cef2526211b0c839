//! Per-caller request context.
//!
//! Every request carries an `MS-CorrelationId` header so that a chain of
//! calls made for one logical operation can be traced on the service side,
//! and a fresh `MS-RequestId` so each individual call is identifiable.

use uuid::Uuid;

use crate::config::Locale;

/// Correlation id and optional locale override for a sequence of calls.
///
/// # Example
///
/// ```rust
/// use partner_center::clients::RequestContext;
/// use uuid::Uuid;
///
/// let correlation_id = Uuid::new_v4();
/// let context = RequestContext::with_correlation_id(correlation_id);
/// assert_eq!(context.correlation_id(), correlation_id);
/// assert!(context.locale().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: Uuid,
    locale: Option<Locale>,
}

impl RequestContext {
    /// Creates a context with a random correlation id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_correlation_id(Uuid::new_v4())
    }

    /// Creates a context with the given correlation id.
    #[must_use]
    pub const fn with_correlation_id(correlation_id: Uuid) -> Self {
        Self {
            correlation_id,
            locale: None,
        }
    }

    /// Returns a copy of this context that overrides the configured locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Returns the correlation id.
    #[must_use]
    pub const fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Returns the locale override, if any.
    #[must_use]
    pub const fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Generates the id for a single request.
    #[must_use]
    pub fn next_request_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
