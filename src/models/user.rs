//! Customer user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::ResourceAttributes;

/// Initial password settings of a new user.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordProfile {
    /// The initial password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Whether the user must change it at next sign-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_change_password: Option<bool>,
}

impl std::fmt::Debug for PasswordProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordProfile")
            .field("password", &self.password.as_ref().map(|_| "*****"))
            .field("force_change_password", &self.force_change_password)
            .finish()
    }
}

/// A user account in a customer tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUser {
    /// The user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The sign-in name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    /// The first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// The last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The password settings; only sent on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_profile: Option<PasswordProfile>,
    /// Two-letter country code where the user works.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_location: Option<String>,
    /// The domain type of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_domain_type: Option<String>,
    /// The user state, such as `active`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// When the user was last synced from the directory.
    #[serde(skip_serializing)]
    pub last_directory_sync_time: Option<DateTime<Utc>>,
    /// When the user was soft-deleted, if it was.
    #[serde(skip_serializing)]
    pub soft_deletion_time: Option<DateTime<Utc>>,
    /// Object metadata.
    #[serde(skip_serializing)]
    pub attributes: Option<ResourceAttributes>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_is_masked_in_debug() {
        let profile = PasswordProfile {
            password: Some("hunter2".to_string()),
            force_change_password: Some(true),
        };

        let debug = format!("{profile:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_new_user_body() {
        let user = CustomerUser {
            user_principal_name: Some("ada@contoso.onmicrosoft.com".to_string()),
            display_name: Some("Ada".to_string()),
            usage_location: Some("US".to_string()),
            password_profile: Some(PasswordProfile {
                password: Some("P@ssw0rd!".to_string()),
                force_change_password: Some(true),
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["userPrincipalName"], "ada@contoso.onmicrosoft.com");
        assert_eq!(value["passwordProfile"]["forceChangePassword"], true);
        assert!(value.get("id").is_none());
    }
}
