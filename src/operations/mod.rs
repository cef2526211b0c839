//! The fluent Partner Center surface.
//!
//! [`PartnerOperations`] is the root every call chain starts from. It owns
//! the configuration and HTTP client (shared through `Arc`, so cloning is
//! cheap) plus the [`RequestContext`] whose correlation id is sent with
//! every request.
//!
//! # Example
//!
//! ```rust,ignore
//! use partner_center::{AccessToken, PartnerConfig, PartnerCredentials, PartnerOperations};
//!
//! let config = PartnerConfig::builder()
//!     .credentials(PartnerCredentials::new(AccessToken::new("token")?, None))
//!     .build()?;
//! let partner = PartnerOperations::new(config)?;
//!
//! let customer = partner.customers().by_id("cust-1")?.get().await?;
//! let subscriptions = partner
//!     .customers()
//!     .by_id("cust-1")?
//!     .subscriptions()
//!     .get()
//!     .await?;
//! ```

mod customer_products;
mod customers;
mod entitlements;
mod invoices;
mod migrations;
mod products;
mod subscriptions;
mod users;

use std::sync::Arc;

use crate::clients::{HttpClient, HttpError, RequestContext};
use crate::config::PartnerConfig;
use crate::rest::{Context, Node};

pub use customer_products::{
    CustomerAvailabilitiesByReservationScope, CustomerAvailabilitiesByTargetSegment,
    CustomerAvailabilityCollection, CustomerAvailabilityOperations,
    CustomerProductByReservationScope, CustomerProductCollection,
    CustomerProductCollectionByTargetSegment, CustomerProductCollectionByTargetSegmentByScope,
    CustomerProductCollectionByTargetView, CustomerProductCollectionByTargetViewByScope,
    CustomerProductOperations, CustomerSkuByReservationScope, CustomerSkuCollection,
    CustomerSkuCollectionByReservationScope, CustomerSkuOperations,
};
pub use customers::{CustomerCollection, CustomerOperations};
pub use entitlements::{EntitlementCollection, EntitlementCollectionByType};
pub use invoices::{
    EstimateCollection, EstimateLinks, EstimateLinksByCurrency, InvoiceCollection,
    InvoiceDocuments, InvoiceLineItems, InvoiceOperations, InvoiceStatement, InvoiceSummaries,
    InvoiceSummaryOperations, ReceiptCollection, ReceiptDocuments, ReceiptOperations,
    ReceiptStatement, ReconciliationLineItems, TaxReceiptCollection, TaxReceiptDocuments,
    TaxReceiptOperations, TaxReceiptStatement,
};
pub use migrations::{
    CustomerMigrationCollection, CustomerMigrationScheduleCollection, MigrationEvents,
    MigrationOperations, MigrationScheduleOperations, PartnerMigrationCollection,
};
pub use products::{
    AvailabilitiesByReservationScope, AvailabilitiesByTargetSegment,
    AvailabilitiesByTargetSegmentByReservationScope, AvailabilityCollection,
    AvailabilityOperations, ProductCollection, ProductCollectionByCountry,
    ProductCollectionByTargetSegment, ProductCollectionByTargetSegmentByReservationScope,
    ProductCollectionByTargetView, ProductCollectionByTargetViewByReservationScope,
    ProductOperations, SkuCollection, SkuCollectionByReservationScope,
    SkuCollectionByTargetSegment, SkuCollectionByTargetSegmentByReservationScope,
    SkuDownloadOptionsOperations, SkuOperations,
};
pub use subscriptions::{
    SubscriptionAddOns, SubscriptionCollection, SubscriptionCollectionByOrder,
    SubscriptionCollectionByPartner, SubscriptionOperations,
    SubscriptionProvisioningStatusOperations, SubscriptionRegistration,
    SubscriptionRegistrationStatusOperations, SubscriptionTransitionEligibilities,
    SubscriptionTransitions, SubscriptionUpgrades,
};
pub use users::{CustomerUserCollection, CustomerUserOperations};

/// The root of every Partner Center call chain.
///
/// # Thread Safety
///
/// `PartnerOperations` is `Clone + Send + Sync`. Clones share the HTTP
/// connection pool and configuration.
#[derive(Clone, Debug)]
pub struct PartnerOperations {
    client: Arc<HttpClient>,
    config: Arc<PartnerConfig>,
    request_context: RequestContext,
}

// Verify PartnerOperations is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartnerOperations>();
};

impl PartnerOperations {
    /// Creates the root operations for a configuration.
    ///
    /// A fresh [`RequestContext`] with a random correlation id is attached.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: PartnerConfig) -> Result<Self, HttpError> {
        let client = HttpClient::new(&config)?;
        tracing::debug!(
            base_uri = client.base_uri(),
            base_path = client.base_path(),
            "Created Partner Center operations"
        );
        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
            request_context: RequestContext::new(),
        })
    }

    /// Returns a copy of this root that sends requests with `context`.
    ///
    /// Use this to correlate a sequence of calls under one id.
    #[must_use]
    pub fn with_request_context(&self, context: RequestContext) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: Arc::clone(&self.config),
            request_context: context,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PartnerConfig {
        &self.config
    }

    /// Returns the request context.
    #[must_use]
    pub const fn request_context(&self) -> &RequestContext {
        &self.request_context
    }

    pub(crate) fn http_client(&self) -> &HttpClient {
        &self.client
    }

    /// The partner's customers.
    #[must_use]
    pub fn customers(&self) -> CustomerCollection {
        self.root_node()
    }

    /// The partner catalog. Products must be narrowed to a country.
    #[must_use]
    pub fn products(&self) -> ProductCollection {
        self.root_node()
    }

    /// The partner's invoices.
    #[must_use]
    pub fn invoices(&self) -> InvoiceCollection {
        self.root_node()
    }

    /// New-commerce migrations across all customers.
    #[must_use]
    pub fn new_commerce_migrations(&self) -> PartnerMigrationCollection {
        self.root_node()
    }

    fn root_node<K>(&self) -> Node<K>
    where
        K: crate::rest::NodeKind,
    {
        Node::unchecked(self.clone(), Context::new())
    }
}
