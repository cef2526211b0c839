//! Entitlement resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The order an entitlement was fulfilled from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceOrder {
    /// The order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The alternate order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_id: Option<String>,
}

/// An artifact delivered with an entitlement, such as a reservation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The artifact kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    /// Artifact-specific attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_attributes: Option<serde_json::Map<String, serde_json::Value>>,
}

/// A product or service the customer is entitled to use.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    /// The product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The SKU id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    /// The number of licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// e.g. `software`, `reservedInstance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_type: Option<String>,
    /// The fulfillment state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_state: Option<String>,
    /// When the entitlement expires, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    /// The order that produced the entitlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_order: Option<ReferenceOrder>,
    /// Entitlements bundled with this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_entitlements: Option<Vec<Entitlement>>,
    /// Artifacts such as reserved instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled_artifacts: Option<Vec<Artifact>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entitlement_with_nested_entitlements() {
        let entitlement: Entitlement = serde_json::from_value(json!({
            "productId": "DG7GMGF0FLV5",
            "skuId": "0001",
            "quantity": 1,
            "entitlementType": "software",
            "includedEntitlements": [{"productId": "DG7GMGF0FLV6"}],
            "entitledArtifacts": [{"type": "Key", "dynamicAttributes": {"keyDisplay": "xxxxx"}}]
        }))
        .unwrap();

        assert_eq!(entitlement.included_entitlements.unwrap().len(), 1);
        assert_eq!(
            entitlement.entitled_artifacts.unwrap()[0].artifact_type.as_deref(),
            Some("Key")
        );
    }
}
