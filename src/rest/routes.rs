//! The route table.
//!
//! Every operation in [`crate::operations`] resolves exactly one of these
//! endpoints. Templates are relative to the API version root (`/v1`).
//! Context fields that a template does not consume are sent as query
//! parameters by [`Endpoint::render`].

use crate::clients::HttpMethod::{Delete, Get, Patch, Post, Put};
use crate::rest::Endpoint;

// Partner catalog

pub const GET_PRODUCTS: Endpoint = Endpoint::new("GetProducts", Get, "products");
pub const GET_PRODUCT: Endpoint = Endpoint::new("GetProduct", Get, "products/{product_id}");
pub const GET_SKUS: Endpoint = Endpoint::new("GetSkus", Get, "products/{product_id}/skus");
pub const GET_SKU: Endpoint = Endpoint::new("GetSku", Get, "products/{product_id}/skus/{sku_id}");
pub const GET_SKU_DOWNLOAD_OPTIONS: Endpoint = Endpoint::new(
    "GetSkuDownloadOptions",
    Get,
    "products/{product_id}/skus/{sku_id}/downloadoptions",
);
pub const GET_AVAILABILITIES: Endpoint = Endpoint::new(
    "GetAvailabilities",
    Get,
    "products/{product_id}/skus/{sku_id}/availabilities",
);
pub const GET_AVAILABILITY: Endpoint = Endpoint::new(
    "GetAvailability",
    Get,
    "products/{product_id}/skus/{sku_id}/availabilities/{availability_id}",
);

// Customers

pub const GET_CUSTOMERS: Endpoint = Endpoint::new("GetCustomers", Get, "customers");
pub const CREATE_CUSTOMER: Endpoint = Endpoint::new("CreateCustomer", Post, "customers");
pub const GET_CUSTOMER: Endpoint = Endpoint::new("GetCustomer", Get, "customers/{customer_id}");

// Customer products

pub const GET_CUSTOMER_PRODUCTS: Endpoint = Endpoint::new(
    "GetCustomerProducts",
    Get,
    "customers/{customer_id}/products",
);
pub const GET_CUSTOMER_PRODUCT: Endpoint = Endpoint::new(
    "GetCustomerProduct",
    Get,
    "customers/{customer_id}/products/{product_id}",
);
pub const GET_CUSTOMER_SKUS: Endpoint = Endpoint::new(
    "GetCustomerSkus",
    Get,
    "customers/{customer_id}/products/{product_id}/skus",
);
pub const GET_CUSTOMER_SKU: Endpoint = Endpoint::new(
    "GetCustomerSku",
    Get,
    "customers/{customer_id}/products/{product_id}/skus/{sku_id}",
);
pub const GET_CUSTOMER_AVAILABILITIES: Endpoint = Endpoint::new(
    "GetCustomerAvailabilities",
    Get,
    "customers/{customer_id}/products/{product_id}/skus/{sku_id}/availabilities",
);
pub const GET_CUSTOMER_AVAILABILITY: Endpoint = Endpoint::new(
    "GetCustomerAvailability",
    Get,
    "customers/{customer_id}/products/{product_id}/skus/{sku_id}/availabilities/{availability_id}",
);

// Customer users

pub const GET_CUSTOMER_USERS: Endpoint =
    Endpoint::new("GetCustomerUsers", Get, "customers/{customer_id}/users");
pub const CREATE_CUSTOMER_USER: Endpoint =
    Endpoint::new("CreateCustomerUser", Post, "customers/{customer_id}/users");
pub const GET_CUSTOMER_USER: Endpoint = Endpoint::new(
    "GetCustomerUser",
    Get,
    "customers/{customer_id}/users/{user_id}",
);
pub const UPDATE_CUSTOMER_USER: Endpoint = Endpoint::new(
    "UpdateCustomerUser",
    Patch,
    "customers/{customer_id}/users/{user_id}",
);
pub const DELETE_CUSTOMER_USER: Endpoint = Endpoint::new(
    "DeleteCustomerUser",
    Delete,
    "customers/{customer_id}/users/{user_id}",
);

// Invoices

pub const GET_INVOICES: Endpoint = Endpoint::new("GetInvoices", Get, "invoices");
pub const GET_INVOICE: Endpoint = Endpoint::new("GetInvoice", Get, "invoices/{invoice_id}");
pub const GET_INVOICE_SUMMARY: Endpoint =
    Endpoint::new("GetInvoiceSummary", Get, "invoices/summary");
pub const GET_INVOICE_SUMMARIES: Endpoint =
    Endpoint::new("GetInvoiceSummaries", Get, "invoices/summaries");
pub const GET_ESTIMATE_LINKS: Endpoint =
    Endpoint::new("GetEstimateLinks", Get, "invoices/estimates/links");
pub const GET_INVOICE_STATEMENT: Endpoint = Endpoint::new(
    "GetInvoiceStatement",
    Get,
    "invoices/{invoice_id}/documents/statement",
);
pub const GET_RECEIPT_STATEMENT: Endpoint = Endpoint::new(
    "GetReceiptStatement",
    Get,
    "invoices/{invoice_id}/receipts/{receipt_id}/documents/statement",
);
pub const GET_TAX_RECEIPT_STATEMENT: Endpoint = Endpoint::new(
    "GetTaxReceiptStatement",
    Get,
    "invoices/{invoice_id}/taxreceipts/{tax_receipt_id}/documents/statement",
);
pub const GET_INVOICE_LINE_ITEMS: Endpoint = Endpoint::new(
    "GetInvoiceLineItems",
    Get,
    "invoices/{invoice_id}/lineitems",
);

// Subscriptions

pub const GET_SUBSCRIPTIONS: Endpoint = Endpoint::new(
    "GetSubscriptions",
    Get,
    "customers/{customer_id}/subscriptions",
);
pub const GET_SUBSCRIPTION: Endpoint = Endpoint::new(
    "GetSubscription",
    Get,
    "customers/{customer_id}/subscriptions/{subscription_id}",
);
pub const UPDATE_SUBSCRIPTION: Endpoint = Endpoint::new(
    "UpdateSubscription",
    Patch,
    "customers/{customer_id}/subscriptions/{subscription_id}",
);
pub const ACTIVATE_SUBSCRIPTION: Endpoint = Endpoint::new(
    "ActivateSubscription",
    Post,
    "customers/{customer_id}/subscriptions/{subscription_id}/activate",
);
pub const GET_SUBSCRIPTION_ADD_ONS: Endpoint = Endpoint::new(
    "GetSubscriptionAddOns",
    Get,
    "customers/{customer_id}/subscriptions/{subscription_id}/addons",
);
pub const GET_SUBSCRIPTION_UPGRADES: Endpoint = Endpoint::new(
    "GetSubscriptionUpgrades",
    Get,
    "customers/{customer_id}/subscriptions/{subscription_id}/upgrades",
);
pub const CREATE_SUBSCRIPTION_UPGRADE: Endpoint = Endpoint::new(
    "CreateSubscriptionUpgrade",
    Post,
    "customers/{customer_id}/subscriptions/{subscription_id}/upgrades",
);
pub const GET_SUBSCRIPTION_PROVISIONING_STATUS: Endpoint = Endpoint::new(
    "GetSubscriptionProvisioningStatus",
    Get,
    "customers/{customer_id}/subscriptions/{subscription_id}/provisioningstatus",
);
pub const REGISTER_SUBSCRIPTION: Endpoint = Endpoint::new(
    "RegisterSubscription",
    Post,
    "customers/{customer_id}/subscriptions/{subscription_id}/registrations",
);
pub const GET_SUBSCRIPTION_REGISTRATION_STATUS: Endpoint = Endpoint::new(
    "GetSubscriptionRegistrationStatus",
    Get,
    "customers/{customer_id}/subscriptions/{subscription_id}/registrationstatus",
);
pub const GET_TRANSITION_ELIGIBILITIES: Endpoint = Endpoint::new(
    "GetTransitionEligibilities",
    Get,
    "customers/{customer_id}/subscriptions/{subscription_id}/transitioneligibilities",
);
pub const GET_TRANSITIONS: Endpoint = Endpoint::new(
    "GetTransitions",
    Get,
    "customers/{customer_id}/subscriptions/{subscription_id}/transitions",
);
pub const CREATE_TRANSITION: Endpoint = Endpoint::new(
    "CreateTransition",
    Post,
    "customers/{customer_id}/subscriptions/{subscription_id}/transitions",
);

// Entitlements

pub const GET_ENTITLEMENTS: Endpoint = Endpoint::new(
    "GetEntitlements",
    Get,
    "customers/{customer_id}/entitlements",
);

// New-commerce migrations

pub const GET_NEW_COMMERCE_MIGRATIONS: Endpoint = Endpoint::new(
    "GetNewCommerceMigrations",
    Get,
    "migrations/newcommerce",
);
pub const CREATE_NEW_COMMERCE_MIGRATION: Endpoint = Endpoint::new(
    "CreateNewCommerceMigration",
    Post,
    "customers/{customer_id}/migrations/newcommerce",
);
pub const VALIDATE_NEW_COMMERCE_MIGRATION: Endpoint = Endpoint::new(
    "ValidateNewCommerceMigration",
    Post,
    "customers/{customer_id}/migrations/newcommerce/validate",
);
pub const GET_NEW_COMMERCE_MIGRATION: Endpoint = Endpoint::new(
    "GetNewCommerceMigration",
    Get,
    "customers/{customer_id}/migrations/newcommerce/{migration_id}",
);
pub const GET_NEW_COMMERCE_MIGRATION_EVENTS: Endpoint = Endpoint::new(
    "GetNewCommerceMigrationEvents",
    Get,
    "customers/{customer_id}/migrations/newcommerce/{migration_id}/events",
);
pub const GET_NEW_COMMERCE_MIGRATION_SCHEDULES: Endpoint = Endpoint::new(
    "GetNewCommerceMigrationSchedules",
    Get,
    "customers/{customer_id}/migrations/newcommerce/schedules",
);
pub const CREATE_NEW_COMMERCE_MIGRATION_SCHEDULE: Endpoint = Endpoint::new(
    "CreateNewCommerceMigrationSchedule",
    Post,
    "customers/{customer_id}/migrations/newcommerce/schedules",
);
pub const GET_NEW_COMMERCE_MIGRATION_SCHEDULE: Endpoint = Endpoint::new(
    "GetNewCommerceMigrationSchedule",
    Get,
    "customers/{customer_id}/migrations/newcommerce/schedules/{schedule_id}",
);
pub const UPDATE_NEW_COMMERCE_MIGRATION_SCHEDULE: Endpoint = Endpoint::new(
    "UpdateNewCommerceMigrationSchedule",
    Put,
    "customers/{customer_id}/migrations/newcommerce/schedules/{schedule_id}",
);
pub const CANCEL_NEW_COMMERCE_MIGRATION_SCHEDULE: Endpoint = Endpoint::new(
    "CancelNewCommerceMigrationSchedule",
    Post,
    "customers/{customer_id}/migrations/newcommerce/schedules/{schedule_id}/cancel",
);
