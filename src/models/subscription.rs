//! Subscription resources.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ItemType, ServiceErrorDetail};
use crate::rest::ResourceAttributes;

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// No status reported.
    None,
    /// In use.
    Active,
    /// Suspended by the partner.
    Suspended,
    /// Deleted.
    Deleted,
    /// Past its end date.
    Expired,
    /// Waiting to be provisioned.
    Pending,
    /// Disabled by the service.
    Disabled,
    /// A status this SDK version does not know about.
    #[serde(other)]
    Unknown,
}

/// A customer subscription.
///
/// Only a handful of fields can be changed with a patch: `quantity`,
/// `friendly_name`, `status`, and `auto_renew_enabled`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// The unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The entitlement the subscription grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_id: Option<String>,
    /// The offer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    /// The offer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_name: Option<String>,
    /// The partner-assigned name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// The product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ItemType>,
    /// The number of licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// The unit of the quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// The parent subscription of an add-on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_subscription_id: Option<String>,
    /// When the subscription was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// When the subscription takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_start_date: Option<DateTime<Utc>>,
    /// When the commitment term ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment_end_date: Option<DateTime<Utc>>,
    /// The subscription status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Whether the subscription renews automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew_enabled: Option<bool>,
    /// The billing type, such as `license`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<String>,
    /// The billing cycle, such as `monthly` or `annual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    /// The term length as an ISO 8601 duration, such as `P1Y`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_duration: Option<String>,
    /// Whether this is a trial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trial: Option<bool>,
    /// Whether add-ons can be purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_purchasable_addons: Option<bool>,
    /// The order that created the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// The MPN id of the partner of record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    /// The contract type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// Result of activating a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionActivationResult {
    /// The subscription id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// The activation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// An upgrade path from a subscription to a target offer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    /// The offer to upgrade to, as returned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_offer: Option<serde_json::Value>,
    /// `upgrade_only` or `upgrade_with_license_transfer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_type: Option<String>,
    /// Whether the operation is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eligible: Option<bool>,
    /// The quantity that would be upgraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Reasons the upgrade is blocked, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_errors: Option<Vec<ServiceErrorDetail>>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// Result of performing an upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeResult {
    /// The subscription that was upgraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_subscription_id: Option<String>,
    /// The subscription created by the upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_subscription_id: Option<String>,
    /// The kind of upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_type: Option<String>,
    /// Failures reported by the upgrade, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_errors: Option<Vec<ServiceErrorDetail>>,
    /// License assignments changed by the upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_updates: Option<Vec<serde_json::Value>>,
}

/// Provisioning progress of a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionProvisioningStatus {
    /// The SKU id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    /// The provisioning status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The provisioned quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// When the provisioning ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Registration state of an Azure reserved-instance subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRegistrationStatus {
    /// The subscription id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// The registration status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Which transitions to ask for when checking eligibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityType {
    /// Transitions that take effect now.
    Immediate,
    /// Transitions that take effect at renewal.
    Scheduled,
}

impl EligibilityType {
    /// Returns the value sent in the `eligibilityType` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for EligibilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog item the subscription may transition to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransitionEligibility {
    /// The catalog item the subscription can move to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<String>,
    /// The target title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The kind of transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_type: Option<String>,
    /// Eligibility details per transition kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibilities: Option<Vec<serde_json::Value>>,
}

/// A transition of a subscription to another catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// The transition id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The source catalog item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_catalog_item_id: Option<String>,
    /// The target catalog item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_catalog_item_id: Option<String>,
    /// The source subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_subscription_id: Option<String>,
    /// The target subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_subscription_id: Option<String>,
    /// The number of licenses to move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// The kind of transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_type: Option<String>,
    /// The transition status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The asynchronous operation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// When the record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_status_accepts_unknown_values() {
        let subscription: Subscription = serde_json::from_value(json!({
            "id": "sub-1",
            "status": "migrating",
            "quantity": 5
        }))
        .unwrap();

        assert_eq!(subscription.status, Some(SubscriptionStatus::Unknown));
        assert_eq!(subscription.quantity, Some(5));
    }

    #[test]
    fn test_patch_body_only_carries_set_fields() {
        let patch = Subscription {
            quantity: Some(10),
            friendly_name: Some("Main seats".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"quantity": 10, "friendlyName": "Main seats"})
        );
    }

    #[test]
    fn test_eligibility_type_display() {
        assert_eq!(EligibilityType::Immediate.to_string(), "immediate");
        assert_eq!(EligibilityType::Scheduled.to_string(), "scheduled");
    }
}
