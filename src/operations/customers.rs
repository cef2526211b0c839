//! The partner's customers.

use crate::clients::execute_sync;
use crate::models::Customer;
use crate::rest::{
    node_kind, routes, Field, PartnerError, Query, QueryKind, ResourceCollection, SeekOperation,
};

use super::customer_products::CustomerProductCollection;
use super::entitlements::EntitlementCollection;
use super::migrations::{CustomerMigrationCollection, CustomerMigrationScheduleCollection};
use super::subscriptions::SubscriptionCollection;
use super::users::CustomerUserCollection;

node_kind! {
    /// The partner's customers.
    CustomersKind => CustomerCollection []
    get ResourceCollection<Customer> = routes::GET_CUSTOMERS
}

node_kind! {
    /// A single customer.
    CustomerKind => CustomerOperations [CustomerId]
    get Customer = routes::GET_CUSTOMER
}

const CUSTOMER_QUERIES: &[QueryKind] = &[
    QueryKind::All,
    QueryKind::Indexed,
    QueryKind::Simple,
    QueryKind::Seek,
];

impl CustomerCollection {
    /// A single customer.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `customer_id` is empty.
    pub fn by_id(&self, customer_id: impl Into<String>) -> Result<CustomerOperations, PartnerError> {
        self.child(Field::CustomerId, customer_id)
    }

    /// Lists customers matching a query.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] for a seek query without a token,
    /// or the transport error if the request fails.
    pub async fn query(&self, query: &Query) -> Result<ResourceCollection<Customer>, PartnerError> {
        query.ensure_kind(CUSTOMER_QUERIES)?;
        self.call(routes::GET_CUSTOMERS)
            .listing(query)?
            .send_json()
            .await
    }

    /// Blocking variant of [`query`](Self::query).
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub fn query_blocking(&self, query: &Query) -> Result<ResourceCollection<Customer>, PartnerError> {
        execute_sync(self.query(query))
    }

    /// Fetches the page following `continuation_token`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyContinuationToken`](crate::rest::ValidationError::EmptyContinuationToken)
    /// if the token is empty.
    pub async fn seek(
        &self,
        continuation_token: &str,
        operation: SeekOperation,
    ) -> Result<ResourceCollection<Customer>, PartnerError> {
        self.query(&Query::seek(continuation_token, operation)).await
    }

    /// Blocking variant of [`seek`](Self::seek).
    ///
    /// # Errors
    ///
    /// Same as [`seek`](Self::seek).
    pub fn seek_blocking(
        &self,
        continuation_token: &str,
        operation: SeekOperation,
    ) -> Result<ResourceCollection<Customer>, PartnerError> {
        execute_sync(self.seek(continuation_token, operation))
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the customer.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, PartnerError> {
        self.call(routes::CREATE_CUSTOMER)
            .json_body(customer)?
            .send_json()
            .await
    }

    /// Blocking variant of [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_blocking(&self, customer: &Customer) -> Result<Customer, PartnerError> {
        execute_sync(self.create(customer))
    }
}

impl CustomerOperations {
    /// Products available to this customer.
    #[must_use]
    pub fn products(&self) -> CustomerProductCollection {
        self.scope()
    }

    /// The customer's subscriptions.
    #[must_use]
    pub fn subscriptions(&self) -> SubscriptionCollection {
        self.scope()
    }

    /// The customer's entitlements.
    #[must_use]
    pub fn entitlements(&self) -> EntitlementCollection {
        self.scope()
    }

    /// User accounts in the customer's tenant.
    #[must_use]
    pub fn users(&self) -> CustomerUserCollection {
        self.scope()
    }

    /// The customer's new-commerce migrations.
    #[must_use]
    pub fn new_commerce_migrations(&self) -> CustomerMigrationCollection {
        self.scope()
    }

    /// The customer's scheduled new-commerce migrations.
    #[must_use]
    pub fn new_commerce_migration_schedules(&self) -> CustomerMigrationScheduleCollection {
        self.scope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::partner;
    use crate::rest::ValidationError;

    #[test]
    fn test_by_id_extends_context() {
        let customer = partner().customers().by_id("cust-1").unwrap();

        assert_eq!(customer.context().get(Field::CustomerId), Some("cust-1"));
        assert_eq!(
            customer.subscriptions().context(),
            customer.context()
        );
    }

    #[test]
    fn test_whitespace_customer_id_is_rejected() {
        let err = partner().customers().by_id(" \n").unwrap_err();
        assert!(matches!(
            err,
            PartnerError::Validation(ValidationError::MissingField {
                field: "customer_id"
            })
        ));
    }
}
