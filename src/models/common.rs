//! Types shared by several resource families.

use serde::{Deserialize, Serialize};

/// A postal address used in billing profiles and company profiles.
///
/// All fields are optional to support partial address data.
///
/// # Example
///
/// ```rust
/// use partner_center::models::Address;
///
/// let address = Address {
///     country: Some("US".to_string()),
///     region: Some("WA".to_string()),
///     city: Some("Redmond".to_string()),
///     address_line1: Some("1 Microsoft Way".to_string()),
///     postal_code: Some("98052".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// City, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,

    /// Second street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Contact first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Contact last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// A catalog item type with an optional sub type (e.g., `Azure` / `Reservation`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemType {
    /// The type identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// A nested sub-type, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<Box<ItemType>>,
}

/// A currency description.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// The ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// The currency name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An error code and description attached to a resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceErrorDetail {
    /// The service error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// The error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_uses_camel_case_and_skips_empty_fields() {
        let address = Address {
            address_line1: Some("1 Main St".to_string()),
            postal_code: Some("98052".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(value, json!({"addressLine1": "1 Main St", "postalCode": "98052"}));
    }

    #[test]
    fn test_item_type_with_sub_type() {
        let item: ItemType = serde_json::from_value(json!({
            "id": "Azure",
            "displayName": "Azure",
            "subType": {"id": "Reservation", "displayName": "Reservation"}
        }))
        .unwrap();

        assert_eq!(
            item.sub_type.and_then(|sub| sub.id),
            Some("Reservation".to_string())
        );
    }
}
