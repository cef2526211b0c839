//! Scoping context carried by every navigation node.
//!
//! A [`Context`] is an ordered list of `(Field, value)` pairs identifying a
//! position in the resource hierarchy, e.g. `(customer_id, product_id,
//! sku_id)`. Extending a context never mutates it; [`Context::with`] returns
//! a new, longer context after validating the added value.

use std::fmt;

use crate::config::CountryCode;
use crate::rest::ValidationError;

/// A dimension of the resource hierarchy.
///
/// Each field has a template placeholder name (used in route templates such
/// as `customers/{customer_id}`) and, when it can travel as a query
/// parameter, the wire name of that parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Customer tenant id.
    CustomerId,
    /// Product id.
    ProductId,
    /// SKU id.
    SkuId,
    /// Availability id.
    AvailabilityId,
    /// Two-letter country code.
    Country,
    /// Catalog target view (e.g., `Azure`, `OnlineServices`).
    TargetView,
    /// Target segment (e.g., `commercial`, `education`).
    TargetSegment,
    /// Reservation scope (e.g., `AzurePlan`).
    ReservationScope,
    /// Invoice id.
    InvoiceId,
    /// Receipt id.
    ReceiptId,
    /// Tax receipt id.
    TaxReceiptId,
    /// Billing provider.
    Provider,
    /// Invoice line item type.
    InvoiceLineItemType,
    /// ISO currency code.
    CurrencyCode,
    /// Billing period.
    Period,
    /// Number of items per page.
    PageSize,
    /// Subscription id.
    SubscriptionId,
    /// Order id.
    OrderId,
    /// Partner (MPN) id.
    PartnerId,
    /// Entitlement type.
    EntitlementType,
    /// Customer user id.
    UserId,
    /// New-commerce migration id.
    MigrationId,
    /// New-commerce migration schedule id.
    ScheduleId,
}

impl Field {
    /// Returns the placeholder name used in route templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CustomerId => "customer_id",
            Self::ProductId => "product_id",
            Self::SkuId => "sku_id",
            Self::AvailabilityId => "availability_id",
            Self::Country => "country",
            Self::TargetView => "target_view",
            Self::TargetSegment => "target_segment",
            Self::ReservationScope => "reservation_scope",
            Self::InvoiceId => "invoice_id",
            Self::ReceiptId => "receipt_id",
            Self::TaxReceiptId => "tax_receipt_id",
            Self::Provider => "provider",
            Self::InvoiceLineItemType => "invoice_line_item_type",
            Self::CurrencyCode => "currency_code",
            Self::Period => "period",
            Self::PageSize => "page_size",
            Self::SubscriptionId => "subscription_id",
            Self::OrderId => "order_id",
            Self::PartnerId => "partner_id",
            Self::EntitlementType => "entitlement_type",
            Self::UserId => "user_id",
            Self::MigrationId => "migration_id",
            Self::ScheduleId => "schedule_id",
        }
    }

    /// Returns the query parameter name, if this field can be sent as one.
    #[must_use]
    pub const fn query_name(self) -> Option<&'static str> {
        match self {
            Self::Country => Some("country"),
            Self::TargetView => Some("targetView"),
            Self::TargetSegment => Some("targetSegment"),
            Self::ReservationScope => Some("reservationScope"),
            Self::Provider => Some("provider"),
            Self::InvoiceLineItemType => Some("invoiceLineItemType"),
            Self::CurrencyCode => Some("currencyCode"),
            Self::Period => Some("period"),
            Self::PageSize => Some("size"),
            Self::OrderId => Some("order_id"),
            Self::PartnerId => Some("mpn_id"),
            Self::EntitlementType => Some("entitlementType"),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, immutable set of field values.
///
/// # Example
///
/// ```rust
/// use partner_center::rest::{Context, Field};
///
/// let customer = Context::new().with(Field::CustomerId, "cust-1").unwrap();
/// let product = customer.with(Field::ProductId, "prod-1").unwrap();
///
/// assert_eq!(customer.len(), 1);
/// assert_eq!(product.get(Field::ProductId), Some("prod-1"));
/// assert!(Context::new().with(Field::SkuId, "  ").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    entries: Vec<(Field, String)>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns a new context extended by `field = value`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] if `value` is empty or whitespace
    /// - [`ValidationError::InvalidCountryCode`] if `field` is
    ///   [`Field::Country`] and `value` is not a two-letter code
    /// - [`ValidationError::DuplicateField`] if `field` is already present
    pub fn with(&self, field: Field, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: field.as_str(),
            });
        }
        if self.contains(field) {
            return Err(ValidationError::DuplicateField {
                field: field.as_str(),
            });
        }

        let value = if field == Field::Country {
            CountryCode::new(value.as_str())
                .map_err(|_| ValidationError::InvalidCountryCode {
                    value: value.clone(),
                })?
                .as_ref()
                .to_string()
        } else {
            value
        };

        let mut entries = self.entries.clone();
        entries.push((field, value));
        Ok(Self { entries })
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the field is present.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    /// Checks that every listed field is present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first absent field.
    pub fn require(&self, fields: &[Field]) -> Result<(), ValidationError> {
        match fields.iter().find(|field| !self.contains(**field)) {
            Some(field) => Err(ValidationError::MissingField {
                field: field.as_str(),
            }),
            None => Ok(()),
        }
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the context has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Field>();
    assert_send_sync::<Context>();
};
