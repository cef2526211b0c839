//! Catalog resources: products, SKUs, availabilities, and download options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{Currency, ItemType};
use crate::rest::{Link, ResourceAttributes};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ItemType>,
    /// Whether Microsoft publishes the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_microsoft_product: Option<bool>,
    /// The publisher name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    /// Related links, keyed by relation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// The unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The smallest quantity that can be purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_quantity: Option<i64>,
    /// The largest quantity that can be purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_quantity: Option<i64>,
    /// Whether this is a trial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trial: Option<bool>,
    /// The billing cycles the SKU supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_billing_cycles: Option<Vec<String>>,
    /// Steps required before purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_prerequisites: Option<Vec<String>>,
    /// Variables needed for an inventory check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_variables: Option<Vec<String>>,
    /// Variables needed at provisioning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_variables: Option<Vec<String>>,
    /// Actions allowed on the SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Service-defined attributes whose shape varies by product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_attributes: Option<HashMap<String, serde_json::Value>>,
    /// Related links, keyed by relation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// A commitment term offered by an availability.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// ISO 8601 duration (e.g., `P1Y`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// The description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The billing cycle, such as `monthly` or `annual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
}

/// A configuration in which a SKU can be purchased.
///
/// Only availabilities can be bought; the `catalog_item_id` identifies the
/// item to place in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// The unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The SKU id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    /// The catalog item the record refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<String>,
    /// The currency the availability is priced in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<Currency>,
    /// The customer segment, such as `commercial`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    /// The country the availability applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Whether the availability can be purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_purchasable: Option<bool>,
    /// Whether the availability can be renewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_renewable: Option<bool>,
    /// The purchasable terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<Term>>,
    /// Related links, keyed by relation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// Download options of a software SKU.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkuDownloadOptions {
    /// The download language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// The display name of the language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_display_name: Option<String>,
    /// The bit architecture, such as `64`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_architecture: Option<String>,
    /// Download links, keyed by relation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}
