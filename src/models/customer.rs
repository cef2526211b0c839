//! Customer resources.

use serde::{Deserialize, Serialize};

use super::common::Address;
use crate::rest::ResourceAttributes;

/// The company profile of a customer tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCompanyProfile {
    /// The Azure AD tenant id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// The primary domain name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// The company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// The company address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// The company contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The billing profile of a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBillingProfile {
    /// The billing profile id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// The last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The billing contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The culture used for formatting, such as `en-US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    /// The language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// The company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// The default billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<Address>,
}

/// A customer of the partner.
///
/// When creating a customer, `company_profile.domain` and the billing
/// profile are required by the service; the id is assigned on creation.
///
/// # Example
///
/// ```rust
/// use partner_center::models::{Address, Customer, CustomerBillingProfile, CustomerCompanyProfile};
///
/// let customer = Customer {
///     company_profile: Some(CustomerCompanyProfile {
///         domain: Some("contoso.onmicrosoft.com".to_string()),
///         ..Default::default()
///     }),
///     billing_profile: Some(CustomerBillingProfile {
///         email: Some("billing@contoso.com".to_string()),
///         culture: Some("en-US".to_string()),
///         language: Some("en".to_string()),
///         company_name: Some("Contoso".to_string()),
///         default_address: Some(Address {
///             country: Some("US".to_string()),
///             ..Default::default()
///         }),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// The customer tenant id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The commerce id of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commerce_id: Option<String>,

    /// Company details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_profile: Option<CustomerCompanyProfile>,

    /// Billing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_profile: Option<CustomerBillingProfile>,

    /// Relationship to the partner (e.g., `reseller`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_to_partner: Option<String>,

    /// Whether delegated admin access is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_delegated_access: Option<bool>,

    /// Object metadata.
    #[serde(skip_serializing)]
    pub attributes: Option<ResourceAttributes>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_deserialization() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cust-1",
            "commerceId": "commerce-1",
            "companyProfile": {"tenantId": "cust-1", "domain": "contoso.onmicrosoft.com", "companyName": "Contoso"},
            "relationshipToPartner": "reseller",
            "allowDelegatedAccess": true,
            "attributes": {"objectType": "Customer"}
        }))
        .unwrap();

        assert_eq!(customer.id.as_deref(), Some("cust-1"));
        assert_eq!(
            customer.company_profile.unwrap().company_name.as_deref(),
            Some("Contoso")
        );
        assert_eq!(customer.allow_delegated_access, Some(true));
    }

    #[test]
    fn test_customer_serialization_skips_attributes() {
        let customer = Customer {
            id: Some("cust-1".to_string()),
            attributes: Some(ResourceAttributes::default()),
            ..Default::default()
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert!(value.get("attributes").is_none());
        assert_eq!(value["id"], "cust-1");
    }
}
