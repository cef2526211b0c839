//! Bearer credentials used to authenticate Partner Center calls.

use chrono::{DateTime, Utc};

use crate::config::AccessToken;

/// An access token plus its optional expiry.
///
/// Credentials are immutable; obtain a fresh token and build a new
/// [`PartnerOperations`](crate::PartnerOperations) when the old one expires.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use partner_center::{AccessToken, PartnerCredentials};
///
/// let credentials = PartnerCredentials::new(
///     AccessToken::new("token").unwrap(),
///     Some(Utc::now() + Duration::minutes(60)),
/// );
/// assert!(!credentials.expired());
/// ```
#[derive(Clone, Debug)]
pub struct PartnerCredentials {
    /// The bearer token.
    pub access_token: AccessToken,

    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl PartnerCredentials {
    /// Creates credentials from a token and optional expiry.
    #[must_use]
    pub const fn new(access_token: AccessToken, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            access_token,
            expires_at,
        }
    }

    /// Returns `true` if the token has expired.
    ///
    /// Tokens without an expiry are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if the credentials can still be used.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.expired()
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token.as_ref())
    }
}

// Verify PartnerCredentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartnerCredentials>();
};
