//! A customer's entitlements.

use crate::clients::execute_sync;
use crate::models::Entitlement;
use crate::rest::{node_kind, routes, Field, PartnerError, ResourceCollection};

node_kind! {
    /// A customer's entitlements.
    EntitlementsKind => EntitlementCollection [CustomerId]
}

node_kind! {
    /// A customer's entitlements of one type.
    EntitlementsByTypeKind => EntitlementCollectionByType [CustomerId, EntitlementType]
}

const SHOW_EXPIRY_PARAM: &str = "showExpiry";

impl EntitlementCollection {
    /// Narrows the listing to one entitlement type, e.g. `software`.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `entitlement_type` is empty.
    pub fn by_entitlement_type(
        &self,
        entitlement_type: impl Into<String>,
    ) -> Result<EntitlementCollectionByType, PartnerError> {
        self.child(Field::EntitlementType, entitlement_type)
    }

    /// Lists the entitlements. With `show_expiry` the service fills in
    /// expiry dates where they apply.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(
        &self,
        show_expiry: bool,
    ) -> Result<ResourceCollection<Entitlement>, PartnerError> {
        self.call(routes::GET_ENTITLEMENTS)
            .query_param(SHOW_EXPIRY_PARAM, show_expiry)
            .send_json()
            .await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(
        &self,
        show_expiry: bool,
    ) -> Result<ResourceCollection<Entitlement>, PartnerError> {
        execute_sync(self.get(show_expiry))
    }
}

impl EntitlementCollectionByType {
    /// Lists the entitlements of this type.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(
        &self,
        show_expiry: bool,
    ) -> Result<ResourceCollection<Entitlement>, PartnerError> {
        self.call(routes::GET_ENTITLEMENTS)
            .query_param(SHOW_EXPIRY_PARAM, show_expiry)
            .send_json()
            .await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(
        &self,
        show_expiry: bool,
    ) -> Result<ResourceCollection<Entitlement>, PartnerError> {
        execute_sync(self.get(show_expiry))
    }
}
