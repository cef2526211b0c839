//! User accounts in a customer tenant.

use crate::clients::execute_sync;
use crate::models::CustomerUser;
use crate::rest::{node_kind, routes, Field, PartnerError, Query, QueryKind, ResourceCollection};

node_kind! {
    /// The users of a customer tenant.
    CustomerUsersKind => CustomerUserCollection [CustomerId]
    get ResourceCollection<CustomerUser> = routes::GET_CUSTOMER_USERS
}

node_kind! {
    /// A single customer user.
    CustomerUserKind => CustomerUserOperations [CustomerId, UserId]
    get CustomerUser = routes::GET_CUSTOMER_USER
}

const USER_QUERIES: &[QueryKind] = &[
    QueryKind::All,
    QueryKind::Indexed,
    QueryKind::Simple,
    QueryKind::Seek,
];

impl CustomerUserCollection {
    /// A single user.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `user_id` is empty.
    pub fn by_id(&self, user_id: impl Into<String>) -> Result<CustomerUserOperations, PartnerError> {
        self.child(Field::UserId, user_id)
    }

    /// Lists users matching a query.
    ///
    /// Indexed queries page with `size`/`offset`, simple queries send the
    /// filter as JSON, and seek queries send the continuation token as a
    /// header.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] for a seek query without a token,
    /// or the transport error if the request fails.
    pub async fn query(
        &self,
        query: &Query,
    ) -> Result<ResourceCollection<CustomerUser>, PartnerError> {
        query.ensure_kind(USER_QUERIES)?;
        self.call(routes::GET_CUSTOMER_USERS)
            .listing(query)?
            .send_json()
            .await
    }

    /// Blocking variant of [`query`](Self::query).
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub fn query_blocking(
        &self,
        query: &Query,
    ) -> Result<ResourceCollection<CustomerUser>, PartnerError> {
        execute_sync(self.query(query))
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the user.
    pub async fn create(&self, user: &CustomerUser) -> Result<CustomerUser, PartnerError> {
        self.call(routes::CREATE_CUSTOMER_USER)
            .json_body(user)?
            .send_json()
            .await
    }

    /// Blocking variant of [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_blocking(&self, user: &CustomerUser) -> Result<CustomerUser, PartnerError> {
        execute_sync(self.create(user))
    }
}

impl CustomerUserOperations {
    /// Updates the user with the fields set in `user`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the update.
    pub async fn patch(&self, user: &CustomerUser) -> Result<CustomerUser, PartnerError> {
        self.call(routes::UPDATE_CUSTOMER_USER)
            .json_body(user)?
            .send_json()
            .await
    }

    /// Blocking variant of [`patch`](Self::patch).
    ///
    /// # Errors
    ///
    /// Same as [`patch`](Self::patch).
    pub fn patch_blocking(&self, user: &CustomerUser) -> Result<CustomerUser, PartnerError> {
        execute_sync(self.patch(user))
    }

    /// Deletes the user.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the service rejects the deletion.
    pub async fn delete(&self) -> Result<(), PartnerError> {
        self.call(routes::DELETE_CUSTOMER_USER).send_headers().await?;
        Ok(())
    }

    /// Blocking variant of [`delete`](Self::delete).
    ///
    /// # Errors
    ///
    /// Same as [`delete`](Self::delete).
    pub fn delete_blocking(&self) -> Result<(), PartnerError> {
        execute_sync(self.delete())
    }
}
