//! Invoice resources and the billing enums used to address line items.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{Link, ResourceAttributes};

/// The billing provider of an invoice line item.
///
/// `None` is a sentinel that line item operations reject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillingProvider {
    /// No provider; rejected by line item operations.
    #[default]
    None,
    /// Office and license-based subscriptions.
    Office,
    /// Azure usage-based subscriptions.
    Azure,
    /// One-time purchases.
    OneTime,
    /// Every provider.
    All,
    /// Marketplace offers.
    Marketplace,
    /// Third-party offers billed externally.
    External,
}

impl BillingProvider {
    /// Returns the value sent in the `provider` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Office => "Office",
            Self::Azure => "Azure",
            Self::OneTime => "OneTime",
            Self::All => "All",
            Self::Marketplace => "Marketplace",
            Self::External => "External",
        }
    }
}

impl fmt::Display for BillingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingProvider {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "");
        [
            Self::None,
            Self::Office,
            Self::Azure,
            Self::OneTime,
            Self::All,
            Self::Marketplace,
            Self::External,
        ]
        .into_iter()
        .find(|provider| provider.as_str().eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| UnknownVariantError::new("billing provider", s))
    }
}

/// The kind of line items to fetch for an invoice.
///
/// `None` is a sentinel that line item operations reject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceLineItemType {
    /// No type; rejected by line item operations.
    #[default]
    None,
    /// Daily rated usage.
    UsageLineItems,
    /// Billed charges.
    BillingLineItems,
}

impl InvoiceLineItemType {
    /// Returns the value sent in the `invoiceLineItemType` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::UsageLineItems => "UsageLineItems",
            Self::BillingLineItems => "BillingLineItems",
        }
    }
}

impl fmt::Display for InvoiceLineItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceLineItemType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "");
        [Self::None, Self::UsageLineItems, Self::BillingLineItems]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownVariantError::new("invoice line item type", s))
    }
}

/// The billing period of reconciliation line items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    /// The open billing period.
    Current,
    /// The last closed billing period.
    Previous,
}

impl BillingPeriod {
    /// Returns the value sent in the `period` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Current, Self::Previous]
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariantError::new("billing period", s))
    }
}

/// Error returned when parsing a billing enum from an unknown string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariantError {
    /// The enum being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariantError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Per-provider detail of an invoice, linking to its line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetail {
    /// The kind of line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_line_item_type: Option<InvoiceLineItemType>,
    /// The billing provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_provider: Option<BillingProvider>,
    /// Links to the line items of this detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<InvoiceDetailLinks>,
}

/// Links of an [`InvoiceDetail`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetailLinks {
    /// The link to the line items.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
}

/// An invoice issued to the partner.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// The invoice id (e.g., `G000024135`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the invoice was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<DateTime<Utc>>,

    /// Start of the billed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_start_date: Option<DateTime<Utc>>,

    /// End of the billed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_end_date: Option<DateTime<Utc>>,

    /// Total charges including taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_charges: Option<f64>,

    /// Amount already paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,

    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Currency symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,

    /// Link to the PDF statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_download_link: Option<String>,

    /// `Recurring` or `OneTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<String>,

    /// `Invoice` or `VoidNote`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Per-provider details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_details: Option<Vec<InvoiceDetail>>,

    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// The partner's account balance summary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    /// The outstanding balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_amount: Option<f64>,
    /// The ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// The currency symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    /// The billing account status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_status: Option<String>,
    /// The amount of the last payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_amount: Option<f64>,
    /// When the last payment was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<DateTime<Utc>>,
    /// When the first invoice was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_invoice_creation_date: Option<DateTime<Utc>>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// A link to a downloadable estimate file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateLink {
    /// The link title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The link description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The estimate link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// A single invoice line item.
///
/// Line item shapes differ per provider and line item type; the two
/// discriminating fields are typed and every other field is kept as JSON.
///
/// # Example
///
/// ```rust
/// use partner_center::models::{BillingProvider, InvoiceLineItem};
/// use serde_json::json;
///
/// let item: InvoiceLineItem = serde_json::from_value(json!({
///     "billingProvider": "azure",
///     "invoiceLineItemType": "usage_line_items",
///     "meterName": "Compute Hours",
///     "quantity": 12.5
/// }))
/// .unwrap();
///
/// assert_eq!(item.billing_provider, Some(BillingProvider::Azure));
/// assert_eq!(item.get("meterName").and_then(|v| v.as_str()), Some("Compute Hours"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    /// The billing provider of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_provider: Option<BillingProvider>,
    /// The kind of line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_line_item_type: Option<InvoiceLineItemType>,
    /// All remaining fields, as returned by the service.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl InvoiceLineItem {
    /// Returns a provider-specific field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.details.get(key)
    }
}
