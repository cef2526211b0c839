//! Authentication types for the Partner Center SDK.
//!
//! Token acquisition (Azure AD application or app+user flows) happens outside
//! this crate. The SDK only needs the resulting bearer token, which is held by
//! [`PartnerCredentials`] and attached to every request by the transport.
//!
//! # Example
//!
//! ```rust
//! use partner_center::{AccessToken, PartnerCredentials};
//!
//! let credentials = PartnerCredentials::new(AccessToken::new("eyJ0eXAi...").unwrap(), None);
//! assert!(credentials.is_active());
//! ```

mod credentials;

pub use credentials::PartnerCredentials;
