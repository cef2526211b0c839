//! New-commerce migrations.
//!
//! Legacy subscriptions move to new commerce either immediately
//! ([`CustomerMigrationCollection::create`]) or on a schedule
//! ([`CustomerMigrationScheduleCollection::create`]). The partner-wide
//! listing needs a [`NewCommerceMigrationFilter`] naming at least one
//! tenant, subscription or external reference.

use crate::clients::execute_sync;
use crate::models::{
    NewCommerceEligibility, NewCommerceMigration, NewCommerceMigrationEvent,
    NewCommerceMigrationFilter, NewCommerceMigrationSchedule,
};
use crate::rest::{node_kind, routes, Field, PartnerError, ResourceCollection};

node_kind! {
    /// New-commerce migrations across all customers.
    PartnerMigrationsKind => PartnerMigrationCollection []
}

node_kind! {
    /// A customer's new-commerce migrations.
    CustomerMigrationsKind => CustomerMigrationCollection [CustomerId]
}

node_kind! {
    /// A single new-commerce migration.
    MigrationKind => MigrationOperations [CustomerId, MigrationId]
    get NewCommerceMigration = routes::GET_NEW_COMMERCE_MIGRATION
}

node_kind! {
    /// The events recorded for a migration.
    MigrationEventsKind => MigrationEvents [CustomerId, MigrationId]
    get ResourceCollection<NewCommerceMigrationEvent> = routes::GET_NEW_COMMERCE_MIGRATION_EVENTS
}

node_kind! {
    /// A customer's scheduled new-commerce migrations.
    CustomerMigrationSchedulesKind => CustomerMigrationScheduleCollection [CustomerId]
    get ResourceCollection<NewCommerceMigrationSchedule> = routes::GET_NEW_COMMERCE_MIGRATION_SCHEDULES
}

node_kind! {
    /// A single migration schedule.
    MigrationScheduleKind => MigrationScheduleOperations [CustomerId, ScheduleId]
    get NewCommerceMigrationSchedule = routes::GET_NEW_COMMERCE_MIGRATION_SCHEDULE
}

impl PartnerMigrationCollection {
    /// Lists migrations matching `filter`.
    ///
    /// The filter is checked before any request is sent. A response body
    /// that cannot be decoded is reported as [`PartnerError::ResponseParse`];
    /// every other failure is returned as the transport reported it.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::OutOfRange`](crate::rest::ValidationError::OutOfRange)
    ///   if the page size is outside `1..=300`
    /// - [`ValidationError::MissingFilter`](crate::rest::ValidationError::MissingFilter)
    ///   if no identifying value is set
    /// - [`PartnerError::ResponseParse`] if the response cannot be decoded
    pub async fn get(
        &self,
        filter: &NewCommerceMigrationFilter,
    ) -> Result<ResourceCollection<NewCommerceMigration>, PartnerError> {
        filter.validate()?;
        self.call(routes::GET_NEW_COMMERCE_MIGRATIONS)
            .query(filter.to_query_params())
            .send_parsed()
            .await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(
        &self,
        filter: &NewCommerceMigrationFilter,
    ) -> Result<ResourceCollection<NewCommerceMigration>, PartnerError> {
        execute_sync(self.get(filter))
    }
}

impl CustomerMigrationCollection {
    /// A single migration.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `migration_id` is empty.
    pub fn by_id(
        &self,
        migration_id: impl Into<String>,
    ) -> Result<MigrationOperations, PartnerError> {
        self.child(Field::MigrationId, migration_id)
    }

    /// Starts a migration.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the migration.
    pub async fn create(
        &self,
        migration: &NewCommerceMigration,
    ) -> Result<NewCommerceMigration, PartnerError> {
        self.call(routes::CREATE_NEW_COMMERCE_MIGRATION)
            .json_body(migration)?
            .send_json()
            .await
    }

    /// Blocking variant of [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_blocking(
        &self,
        migration: &NewCommerceMigration,
    ) -> Result<NewCommerceMigration, PartnerError> {
        execute_sync(self.create(migration))
    }

    /// Checks whether a migration would be accepted, without starting it.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn validate(
        &self,
        migration: &NewCommerceMigration,
    ) -> Result<NewCommerceEligibility, PartnerError> {
        self.call(routes::VALIDATE_NEW_COMMERCE_MIGRATION)
            .json_body(migration)?
            .send_json()
            .await
    }

    /// Blocking variant of [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn validate_blocking(
        &self,
        migration: &NewCommerceMigration,
    ) -> Result<NewCommerceEligibility, PartnerError> {
        execute_sync(self.validate(migration))
    }
}

impl MigrationOperations {
    /// The events recorded for this migration.
    #[must_use]
    pub fn events(&self) -> MigrationEvents {
        self.scope()
    }
}

impl CustomerMigrationScheduleCollection {
    /// A single schedule.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `schedule_id` is empty.
    pub fn by_id(
        &self,
        schedule_id: impl Into<String>,
    ) -> Result<MigrationScheduleOperations, PartnerError> {
        self.child(Field::ScheduleId, schedule_id)
    }

    /// Schedules a migration.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the schedule.
    pub async fn create(
        &self,
        schedule: &NewCommerceMigrationSchedule,
    ) -> Result<NewCommerceMigrationSchedule, PartnerError> {
        self.call(routes::CREATE_NEW_COMMERCE_MIGRATION_SCHEDULE)
            .json_body(schedule)?
            .send_json()
            .await
    }

    /// Blocking variant of [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_blocking(
        &self,
        schedule: &NewCommerceMigrationSchedule,
    ) -> Result<NewCommerceMigrationSchedule, PartnerError> {
        execute_sync(self.create(schedule))
    }
}

impl MigrationScheduleOperations {
    /// Replaces the schedule.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the update.
    pub async fn put(
        &self,
        schedule: &NewCommerceMigrationSchedule,
    ) -> Result<NewCommerceMigrationSchedule, PartnerError> {
        self.call(routes::UPDATE_NEW_COMMERCE_MIGRATION_SCHEDULE)
            .json_body(schedule)?
            .send_json()
            .await
    }

    /// Blocking variant of [`put`](Self::put).
    ///
    /// # Errors
    ///
    /// Same as [`put`](Self::put).
    pub fn put_blocking(
        &self,
        schedule: &NewCommerceMigrationSchedule,
    ) -> Result<NewCommerceMigrationSchedule, PartnerError> {
        execute_sync(self.put(schedule))
    }

    /// Cancels the schedule.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the schedule can no longer be
    /// cancelled.
    pub async fn cancel(&self) -> Result<NewCommerceMigrationSchedule, PartnerError> {
        self.call(routes::CANCEL_NEW_COMMERCE_MIGRATION_SCHEDULE)
            .send_json()
            .await
    }

    /// Blocking variant of [`cancel`](Self::cancel).
    ///
    /// # Errors
    ///
    /// Same as [`cancel`](Self::cancel).
    pub fn cancel_blocking(&self) -> Result<NewCommerceMigrationSchedule, PartnerError> {
        execute_sync(self.cancel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::partner;
    use crate::rest::ValidationError;

    #[tokio::test]
    async fn test_invalid_filter_fails_before_request() {
        let migrations = partner().new_commerce_migrations();

        let err = migrations
            .get(&NewCommerceMigrationFilter::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PartnerError::Validation(ValidationError::MissingFilter { .. })
        ));

        let filter = NewCommerceMigrationFilter::new()
            .customer_tenant_id("tenant-1")
            .page_size(301);
        let err = migrations.get(&filter).await.unwrap_err();
        assert!(matches!(
            err,
            PartnerError::Validation(ValidationError::OutOfRange { value: 301, .. })
        ));
    }

    #[test]
    fn test_schedule_path() {
        let schedule = partner()
            .customers()
            .by_id("cust-1")
            .unwrap()
            .new_commerce_migration_schedules()
            .by_id("sched-1")
            .unwrap();

        let rendered = routes::CANCEL_NEW_COMMERCE_MIGRATION_SCHEDULE
            .render(schedule.context())
            .unwrap();
        assert_eq!(
            rendered.path,
            "customers/cust-1/migrations/newcommerce/schedules/sched-1/cancel"
        );
    }
}
