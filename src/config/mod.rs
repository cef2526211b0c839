//! Configuration types for the Partner Center SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PartnerConfig`]: The configuration shared by every operation
//! - [`PartnerConfigBuilder`]: A builder for constructing [`PartnerConfig`] instances
//! - [`AccessToken`]: A validated bearer token with masked debug output
//! - [`BaseUrl`]: The validated service root
//! - [`CountryCode`]: A validated two-letter country code
//! - [`Locale`]: The validated locale sent with each request
//! - [`ApiVersion`]: The API version path segment
//!
//! # Example
//!
//! ```rust
//! use partner_center::{AccessToken, ApiVersion, PartnerConfig, PartnerCredentials};
//!
//! let config = PartnerConfig::builder()
//!     .credentials(PartnerCredentials::new(AccessToken::new("token").unwrap(), None))
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BaseUrl, CountryCode, Locale};
pub use version::ApiVersion;

use crate::auth::PartnerCredentials;
use crate::error::ConfigError;

/// Configuration for the Partner Center SDK.
///
/// # Thread Safety
///
/// `PartnerConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use partner_center::{AccessToken, BaseUrl, PartnerConfig, PartnerCredentials};
///
/// let config = PartnerConfig::builder()
///     .credentials(PartnerCredentials::new(AccessToken::new("token").unwrap(), None))
///     .base_url(BaseUrl::new("https://api.partnercenter.microsoft.com").unwrap())
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct PartnerConfig {
    credentials: PartnerCredentials,
    base_url: BaseUrl,
    api_version: ApiVersion,
    locale: Locale,
    user_agent_prefix: Option<String>,
    application_name: Option<String>,
    tries: u32,
}

impl PartnerConfig {
    /// Creates a new builder for constructing a `PartnerConfig`.
    #[must_use]
    pub fn builder() -> PartnerConfigBuilder {
        PartnerConfigBuilder::new()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &PartnerCredentials {
        &self.credentials
    }

    /// Returns the service root.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the application name sent in `MS-PartnerCenter-Application`, if configured.
    #[must_use]
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    /// Returns how many times each request is attempted.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify PartnerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartnerConfig>();
};

/// Builder for constructing [`PartnerConfig`] instances.
///
/// `credentials` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `api_version`: `v1`
/// - `locale`: `en-US`
/// - `tries`: 1 (no retries)
/// - `user_agent_prefix`, `application_name`: `None`
#[derive(Debug, Default)]
pub struct PartnerConfigBuilder {
    credentials: Option<PartnerCredentials>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    locale: Option<Locale>,
    user_agent_prefix: Option<String>,
    application_name: Option<String>,
    tries: Option<u32>,
}

impl PartnerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: PartnerCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the service root.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the default locale.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the application name reported to the service.
    #[must_use]
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Sets how many times each request is attempted.
    ///
    /// Values above 1 enable retries on 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`PartnerConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `credentials` is not set.
    pub fn build(self) -> Result<PartnerConfig, ConfigError> {
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        Ok(PartnerConfig {
            credentials,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            locale: self.locale.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            application_name: self.application_name,
            tries: self.tries.unwrap_or(1).max(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> PartnerCredentials {
        PartnerCredentials::new(AccessToken::new("token").unwrap(), None)
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = PartnerConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PartnerConfig::builder()
            .credentials(credentials())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert_eq!(config.api_version(), &ApiVersion::V1);
        assert_eq!(config.locale().as_ref(), "en-US");
        assert_eq!(config.tries(), 1);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.application_name().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = PartnerConfig::builder()
            .credentials(credentials())
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .api_version("v2".parse().unwrap())
            .locale(Locale::new("fr-FR").unwrap())
            .user_agent_prefix("Reseller/2.0")
            .application_name("provisioning-worker")
            .tries(4)
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.api_version().to_string(), "v2");
        assert_eq!(config.locale().as_ref(), "fr-FR");
        assert_eq!(config.user_agent_prefix(), Some("Reseller/2.0"));
        assert_eq!(config.application_name(), Some("provisioning-worker"));
        assert_eq!(config.tries(), 4);
    }

    #[test]
    fn test_zero_tries_is_clamped_to_one() {
        let config = PartnerConfig::builder()
            .credentials(credentials())
            .tries(0)
            .build()
            .unwrap();

        assert_eq!(config.tries(), 1);
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_token() {
        let config = PartnerConfig::builder()
            .credentials(credentials())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("PartnerConfig"));
        assert!(debug_str.contains("AccessToken(*****)"));
    }
}
