//! New-commerce migration resources.
//!
//! A migration moves a legacy subscription to the new-commerce experience.
//! It can run immediately ([`NewCommerceMigration`]) or be scheduled
//! ([`NewCommerceMigrationSchedule`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ServiceErrorDetail;
use crate::rest::{ResourceAttributes, ValidationError};

/// A migration of a legacy subscription to new commerce.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCommerceMigration {
    /// The migration id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the migration started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// When the migration completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<DateTime<Utc>>,
    /// The legacy subscription being migrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_subscription_id: Option<String>,
    /// The migration status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The customer's Azure AD tenant id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_tenant_id: Option<String>,
    /// The target new-commerce catalog item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<String>,
    /// The subscription created by the migration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_commerce_subscription_id: Option<String>,
    /// The order created by the migration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_commerce_order_id: Option<String>,
    /// When the legacy subscription ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_end_date: Option<DateTime<Utc>>,
    /// The number of licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// The term length as an ISO 8601 duration, such as `P1Y`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_duration: Option<String>,
    /// The billing cycle, such as `monthly` or `annual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    /// Whether a new full term is purchased at migration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_full_term: Option<bool>,
    /// A partner-supplied reference id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference_id: Option<String>,
    /// Object metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ResourceAttributes>,
}

/// Whether a subscription can be migrated, and why not.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCommerceEligibility {
    /// The legacy subscription being migrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_subscription_id: Option<String>,
    /// Whether the operation is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eligible: Option<bool>,
    /// The target new-commerce catalog item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<String>,
    /// The term length as an ISO 8601 duration, such as `P1Y`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_duration: Option<String>,
    /// The billing cycle, such as `monthly` or `annual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    /// Reasons the migration is blocked, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ServiceErrorDetail>>,
}

/// A step recorded while a migration ran.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCommerceMigrationEvent {
    /// The event id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The event name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// When the event happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<DateTime<Utc>>,
    /// The migration status after the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The failure, if the event reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceErrorDetail>,
}

/// A migration planned for a later date or for the next renewal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCommerceMigrationSchedule {
    /// The schedule id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The legacy subscription being migrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_subscription_id: Option<String>,
    /// The date the migration should run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    /// Whether the migration runs at renewal instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_on_renewal: Option<bool>,
    /// The schedule status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The customer's Azure AD tenant id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_tenant_id: Option<String>,
    /// The target new-commerce catalog item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<String>,
    /// The number of licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// The term length as an ISO 8601 duration, such as `P1Y`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_duration: Option<String>,
    /// The billing cycle, such as `monthly` or `annual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    /// Whether a new full term is purchased at migration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_full_term: Option<bool>,
    /// A partner-supplied reference id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference_id: Option<String>,
    /// When the record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    /// When the schedule was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime<Utc>>,
}

/// Filter for the partner-wide migration listing.
///
/// At least one of the identifying values must be set, and the page size
/// must be within `1..=300`.
///
/// # Example
///
/// ```rust
/// use partner_center::models::NewCommerceMigrationFilter;
///
/// let filter = NewCommerceMigrationFilter::new()
///     .customer_tenant_id("4d3cf487-70f6-4000-a2b3-1a0e5b3f2c6e")
///     .page_size(100);
///
/// assert!(filter.validate().is_ok());
/// assert!(NewCommerceMigrationFilter::new().validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommerceMigrationFilter {
    /// Only migrations of this customer tenant.
    pub customer_tenant_id: Option<String>,
    /// Only migrations of this legacy subscription.
    pub current_subscription_id: Option<String>,
    /// Only migrations with this partner reference.
    pub external_reference_id: Option<String>,
    /// The page size, sent as `top`; must be within `1..=300`.
    pub page_size: i32,
}

impl NewCommerceMigrationFilter {
    /// Largest accepted page size.
    pub const MAX_PAGE_SIZE: i32 = 300;

    /// Creates an empty filter with the largest page size.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customer_tenant_id: None,
            current_subscription_id: None,
            external_reference_id: None,
            page_size: Self::MAX_PAGE_SIZE,
        }
    }

    /// Sets the customer tenant id.
    #[must_use]
    pub fn customer_tenant_id(mut self, id: impl Into<String>) -> Self {
        self.customer_tenant_id = Some(id.into());
        self
    }

    /// Sets the current (legacy) subscription id.
    #[must_use]
    pub fn current_subscription_id(mut self, id: impl Into<String>) -> Self {
        self.current_subscription_id = Some(id.into());
        self
    }

    /// Sets the external reference id.
    #[must_use]
    pub fn external_reference_id(mut self, id: impl Into<String>) -> Self {
        self.external_reference_id = Some(id.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks the filter.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::OutOfRange`] if the page size is outside `1..=300`
    /// - [`ValidationError::MissingFilter`] if no identifying value is set
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=Self::MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ValidationError::OutOfRange {
                field: "page_size",
                min: 1,
                max: i64::from(Self::MAX_PAGE_SIZE),
                value: i64::from(self.page_size),
            });
        }

        if self.identifiers().next().is_none() {
            return Err(ValidationError::MissingFilter {
                fields: "customer_tenant_id, current_subscription_id or external_reference_id",
            });
        }

        Ok(())
    }

    /// Returns the query parameters for the listing, in a fixed order.
    #[must_use]
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .identifiers()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        params.push(("top".to_string(), self.page_size.to_string()));
        params
    }

    fn identifiers(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("customerTenantId", self.customer_tenant_id.as_deref()),
            ("currentSubscriptionId", self.current_subscription_id.as_deref()),
            ("externalReferenceId", self.external_reference_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key, value))
        })
    }
}

impl Default for NewCommerceMigrationFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_bounds() {
        let base = NewCommerceMigrationFilter::new().current_subscription_id("sub-1");

        assert!(base.clone().page_size(1).validate().is_ok());
        assert!(base.clone().page_size(300).validate().is_ok());
        for size in [0, -1, 301] {
            assert_eq!(
                base.clone().page_size(size).validate(),
                Err(ValidationError::OutOfRange {
                    field: "page_size",
                    min: 1,
                    max: 300,
                    value: i64::from(size),
                })
            );
        }
    }

    #[test]
    fn test_whitespace_identifiers_do_not_count() {
        let filter = NewCommerceMigrationFilter::new()
            .customer_tenant_id(" ")
            .external_reference_id("");

        assert!(matches!(
            filter.validate(),
            Err(ValidationError::MissingFilter { .. })
        ));
    }

    #[test]
    fn test_query_params_skip_unset_identifiers() {
        let filter = NewCommerceMigrationFilter::new()
            .external_reference_id("ref-1")
            .page_size(50);

        assert_eq!(
            filter.to_query_params(),
            vec![
                ("externalReferenceId".to_string(), "ref-1".to_string()),
                ("top".to_string(), "50".to_string()),
            ]
        );
    }
}
