//! Resource types exchanged with the Partner Center API.
//!
//! All types use camelCase JSON field names, skip unset optional fields when
//! serialized, and tolerate missing fields when deserialized.

mod common;
mod customer;
mod entitlement;
mod invoice;
mod migration;
mod product;
mod subscription;
mod user;

pub use common::{Address, Currency, ItemType, ServiceErrorDetail};
pub use customer::{Customer, CustomerBillingProfile, CustomerCompanyProfile};
pub use entitlement::{Artifact, Entitlement, ReferenceOrder};
pub use invoice::{
    BillingPeriod, BillingProvider, EstimateLink, Invoice, InvoiceDetail, InvoiceDetailLinks,
    InvoiceLineItem, InvoiceLineItemType, InvoiceSummary, UnknownVariantError,
};
pub use migration::{
    NewCommerceEligibility, NewCommerceMigration, NewCommerceMigrationEvent,
    NewCommerceMigrationFilter, NewCommerceMigrationSchedule,
};
pub use product::{Availability, Product, Sku, SkuDownloadOptions, Term};
pub use subscription::{
    EligibilityType, Subscription, SubscriptionActivationResult, SubscriptionProvisioningStatus,
    SubscriptionRegistrationStatus, SubscriptionStatus, Transition, TransitionEligibility,
    Upgrade, UpgradeResult,
};
pub use user::{CustomerUser, PasswordProfile};
