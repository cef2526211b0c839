//! Customer subscriptions and their lifecycle operations.

use crate::clients::execute_sync;
use crate::models::{
    EligibilityType, Subscription, SubscriptionActivationResult, SubscriptionProvisioningStatus,
    SubscriptionRegistrationStatus, Transition, TransitionEligibility, Upgrade, UpgradeResult,
};
use crate::rest::{node_kind, routes, Field, PartnerError, ResourceCollection};

node_kind! {
    /// A customer's subscriptions.
    SubscriptionsKind => SubscriptionCollection [CustomerId]
    get ResourceCollection<Subscription> = routes::GET_SUBSCRIPTIONS
}

node_kind! {
    /// Subscriptions created by one order.
    SubscriptionsByOrderKind => SubscriptionCollectionByOrder [CustomerId, OrderId]
    get ResourceCollection<Subscription> = routes::GET_SUBSCRIPTIONS
}

node_kind! {
    /// Subscriptions sold through one partner (MPN id).
    SubscriptionsByPartnerKind => SubscriptionCollectionByPartner [CustomerId, PartnerId]
    get ResourceCollection<Subscription> = routes::GET_SUBSCRIPTIONS
}

node_kind! {
    /// A single subscription.
    SubscriptionKind => SubscriptionOperations [CustomerId, SubscriptionId]
    get Subscription = routes::GET_SUBSCRIPTION
}

node_kind! {
    /// Add-on subscriptions of a subscription.
    SubscriptionAddOnsKind => SubscriptionAddOns [CustomerId, SubscriptionId]
    get ResourceCollection<Subscription> = routes::GET_SUBSCRIPTION_ADD_ONS
}

node_kind! {
    /// Upgrade paths of a subscription.
    SubscriptionUpgradesKind => SubscriptionUpgrades [CustomerId, SubscriptionId]
    get ResourceCollection<Upgrade> = routes::GET_SUBSCRIPTION_UPGRADES
}

node_kind! {
    /// Provisioning progress of a subscription.
    SubscriptionProvisioningStatusKind => SubscriptionProvisioningStatusOperations [CustomerId, SubscriptionId]
    get SubscriptionProvisioningStatus = routes::GET_SUBSCRIPTION_PROVISIONING_STATUS
}

node_kind! {
    /// Registration of an Azure reserved-instance subscription.
    SubscriptionRegistrationKind => SubscriptionRegistration [CustomerId, SubscriptionId]
}

node_kind! {
    /// Registration state of a subscription.
    SubscriptionRegistrationStatusKind => SubscriptionRegistrationStatusOperations [CustomerId, SubscriptionId]
    get SubscriptionRegistrationStatus = routes::GET_SUBSCRIPTION_REGISTRATION_STATUS
}

node_kind! {
    /// Catalog items a subscription may transition to.
    SubscriptionTransitionEligibilitiesKind => SubscriptionTransitionEligibilities [CustomerId, SubscriptionId]
}

node_kind! {
    /// Transitions of a subscription.
    SubscriptionTransitionsKind => SubscriptionTransitions [CustomerId, SubscriptionId]
}

impl SubscriptionCollection {
    /// A single subscription.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `subscription_id` is empty.
    pub fn by_id(
        &self,
        subscription_id: impl Into<String>,
    ) -> Result<SubscriptionOperations, PartnerError> {
        self.child(Field::SubscriptionId, subscription_id)
    }

    /// Narrows the listing to the subscriptions of an order.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `order_id` is empty.
    pub fn by_order(
        &self,
        order_id: impl Into<String>,
    ) -> Result<SubscriptionCollectionByOrder, PartnerError> {
        self.child(Field::OrderId, order_id)
    }

    /// Narrows the listing to the subscriptions of a partner.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `partner_id` is empty.
    pub fn by_partner(
        &self,
        partner_id: impl Into<String>,
    ) -> Result<SubscriptionCollectionByPartner, PartnerError> {
        self.child(Field::PartnerId, partner_id)
    }
}

impl SubscriptionOperations {
    /// Updates the subscription with the fields set in `subscription`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the update.
    pub async fn patch(&self, subscription: &Subscription) -> Result<Subscription, PartnerError> {
        self.call(routes::UPDATE_SUBSCRIPTION)
            .json_body(subscription)?
            .send_json()
            .await
    }

    /// Blocking variant of [`patch`](Self::patch).
    ///
    /// # Errors
    ///
    /// Same as [`patch`](Self::patch).
    pub fn patch_blocking(&self, subscription: &Subscription) -> Result<Subscription, PartnerError> {
        execute_sync(self.patch(subscription))
    }

    /// Activates a subscription that is waiting for activation.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the activation.
    pub async fn activate(&self) -> Result<SubscriptionActivationResult, PartnerError> {
        self.call(routes::ACTIVATE_SUBSCRIPTION).send_json().await
    }

    /// Blocking variant of [`activate`](Self::activate).
    ///
    /// # Errors
    ///
    /// Same as [`activate`](Self::activate).
    pub fn activate_blocking(&self) -> Result<SubscriptionActivationResult, PartnerError> {
        execute_sync(self.activate())
    }

    /// Add-on subscriptions.
    #[must_use]
    pub fn add_ons(&self) -> SubscriptionAddOns {
        self.scope()
    }

    /// Upgrade paths.
    #[must_use]
    pub fn upgrades(&self) -> SubscriptionUpgrades {
        self.scope()
    }

    /// Provisioning progress.
    #[must_use]
    pub fn provisioning_status(&self) -> SubscriptionProvisioningStatusOperations {
        self.scope()
    }

    /// Registration.
    #[must_use]
    pub fn registration(&self) -> SubscriptionRegistration {
        self.scope()
    }

    /// Registration state.
    #[must_use]
    pub fn registration_status(&self) -> SubscriptionRegistrationStatusOperations {
        self.scope()
    }

    /// Transition eligibilities.
    #[must_use]
    pub fn transition_eligibilities(&self) -> SubscriptionTransitionEligibilities {
        self.scope()
    }

    /// Transitions.
    #[must_use]
    pub fn transitions(&self) -> SubscriptionTransitions {
        self.scope()
    }
}

impl SubscriptionUpgrades {
    /// Performs an upgrade.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the upgrade.
    pub async fn create(&self, upgrade: &Upgrade) -> Result<UpgradeResult, PartnerError> {
        self.call(routes::CREATE_SUBSCRIPTION_UPGRADE)
            .json_body(upgrade)?
            .send_json()
            .await
    }

    /// Blocking variant of [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_blocking(&self, upgrade: &Upgrade) -> Result<UpgradeResult, PartnerError> {
        execute_sync(self.create(upgrade))
    }
}

impl SubscriptionRegistration {
    /// Registers the subscription.
    ///
    /// Returns the `Location` header of the response, which points at the
    /// registration status, or an empty string if the service sent none.
    /// The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the registration.
    pub async fn register(&self) -> Result<String, PartnerError> {
        let response = self
            .call(routes::REGISTER_SUBSCRIPTION)
            .send_headers()
            .await?;
        Ok(response.location().unwrap_or_default().to_string())
    }

    /// Blocking variant of [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn register_blocking(&self) -> Result<String, PartnerError> {
        execute_sync(self.register())
    }
}

impl SubscriptionTransitionEligibilities {
    /// Lists transition eligibilities, optionally of one kind.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(
        &self,
        eligibility_type: Option<EligibilityType>,
    ) -> Result<ResourceCollection<TransitionEligibility>, PartnerError> {
        let mut call = self.call(routes::GET_TRANSITION_ELIGIBILITIES);
        if let Some(eligibility_type) = eligibility_type {
            call = call.query_param("eligibilityType", eligibility_type);
        }
        call.send_json().await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(
        &self,
        eligibility_type: Option<EligibilityType>,
    ) -> Result<ResourceCollection<TransitionEligibility>, PartnerError> {
        execute_sync(self.get(eligibility_type))
    }
}

impl SubscriptionTransitions {
    /// Lists transitions, optionally only those of one operation.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(
        &self,
        operation_id: Option<&str>,
    ) -> Result<ResourceCollection<Transition>, PartnerError> {
        let mut call = self.call(routes::GET_TRANSITIONS);
        if let Some(operation_id) = operation_id.filter(|id| !id.trim().is_empty()) {
            call = call.query_param("operationId", operation_id);
        }
        call.send_json().await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(
        &self,
        operation_id: Option<&str>,
    ) -> Result<ResourceCollection<Transition>, PartnerError> {
        execute_sync(self.get(operation_id))
    }

    /// Starts a transition.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the transition.
    pub async fn create(&self, transition: &Transition) -> Result<Transition, PartnerError> {
        self.call(routes::CREATE_TRANSITION)
            .json_body(transition)?
            .send_json()
            .await
    }

    /// Blocking variant of [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_blocking(&self, transition: &Transition) -> Result<Transition, PartnerError> {
        execute_sync(self.create(transition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::partner;

    fn subscriptions() -> SubscriptionCollection {
        partner().customers().by_id("cust-1").unwrap().subscriptions()
    }

    #[test]
    fn test_order_and_partner_filters_are_query_parameters() {
        let by_order = subscriptions().by_order("order-9").unwrap();
        let rendered = routes::GET_SUBSCRIPTIONS.render(by_order.context()).unwrap();
        assert_eq!(rendered.path, "customers/cust-1/subscriptions");
        assert_eq!(
            rendered.query,
            vec![("order_id".to_string(), "order-9".to_string())]
        );

        let by_partner = subscriptions().by_partner("4847383").unwrap();
        let rendered = routes::GET_SUBSCRIPTIONS.render(by_partner.context()).unwrap();
        assert_eq!(
            rendered.query,
            vec![("mpn_id".to_string(), "4847383".to_string())]
        );
    }

    #[test]
    fn test_subscription_children_share_context() {
        let subscription = subscriptions().by_id("sub-1").unwrap();
        let rendered = routes::GET_TRANSITION_ELIGIBILITIES
            .render(subscription.transition_eligibilities().context())
            .unwrap();

        assert_eq!(
            rendered.path,
            "customers/cust-1/subscriptions/sub-1/transitioneligibilities"
        );
        assert!(rendered.query.is_empty());
    }
}
