//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Partner Center access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use partner_center::AccessToken;
///
/// let token = AccessToken::new("eyJ0eXAi...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated two-letter country code.
///
/// Country codes are normalized to upper case. Only ISO 3166-1 alpha-2
/// shaped values (two ASCII letters) are accepted.
///
/// # Example
///
/// ```rust
/// use partner_center::CountryCode;
///
/// let country = CountryCode::new("us").unwrap();
/// assert_eq!(country.as_ref(), "US");
///
/// assert!(CountryCode::new("USA").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a new validated country code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCountryCode`] if the value is not two ASCII letters.
    pub fn new(country: impl Into<String>) -> Result<Self, ConfigError> {
        let country = country.into();
        let trimmed = country.trim();

        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCountryCode { country });
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated locale in `ll-CC` form (e.g., `en-US`).
///
/// The locale is sent with every request in the `X-Locale` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    /// Creates a new validated locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] if the value is not `ll-CC` shaped.
    pub fn new(locale: impl Into<String>) -> Result<Self, ConfigError> {
        let locale = locale.into();
        let valid = locale.split_once('-').is_some_and(|(language, region)| {
            (2..=3).contains(&language.len())
                && language.chars().all(|c| c.is_ascii_alphabetic())
                && region.len() == 2
                && region.chars().all(|c| c.is_ascii_alphabetic())
        });

        if !valid {
            return Err(ConfigError::InvalidLocale { locale });
        }
        Ok(Self(locale))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated base URL for the Partner Center API.
///
/// This newtype validates that the URL has a proper format with a scheme
/// and host. Any trailing slash is removed.
///
/// # Example
///
/// ```rust
/// use partner_center::BaseUrl;
///
/// let url = BaseUrl::new("https://api.partnercenter.microsoft.com/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("api.partnercenter.microsoft.com"));
/// assert_eq!(url.as_ref(), "https://api.partnercenter.microsoft.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The public Partner Center endpoint.
    pub const DEFAULT: &'static str = "https://api.partnercenter.microsoft.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let scheme_end = Self::DEFAULT.find("://").unwrap_or_default();
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end,
            host_start: scheme_end + 3,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_and_whitespace() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_country_code_normalizes_case() {
        let country = CountryCode::new("gb").unwrap();
        assert_eq!(country.as_ref(), "GB");
        assert_eq!(country.to_string(), "GB");
    }

    #[test]
    fn test_country_code_rejects_malformed_values() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("U").is_err());
        assert!(CountryCode::new("USA").is_err());
        assert!(CountryCode::new("1A").is_err());
        assert!(CountryCode::new("u s").is_err());
    }

    #[test]
    fn test_country_code_deserialization_validates() {
        let country: CountryCode = serde_json::from_str(r#""de""#).unwrap();
        assert_eq!(country.as_ref(), "DE");
        assert!(serde_json::from_str::<CountryCode>(r#""deu""#).is_err());
    }

    #[test]
    fn test_locale_validation() {
        assert!(Locale::new("en-US").is_ok());
        assert!(Locale::new("fil-PH").is_ok());
        assert!(Locale::new("english").is_err());
        assert!(Locale::new("en-USA").is_err());
        assert_eq!(Locale::default().as_ref(), "en-US");
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));

        assert!(BaseUrl::new("api.partnercenter.microsoft.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
    }

    #[test]
    fn test_base_url_default_matches_constant() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), BaseUrl::DEFAULT);
        assert_eq!(url.host_name(), Some("api.partnercenter.microsoft.com"));
        assert_eq!(url, BaseUrl::new(BaseUrl::DEFAULT).unwrap());
    }
}
