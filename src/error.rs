//! Error types for SDK configuration.
//!
//! This module contains the error type returned when configuration values
//! or the configuration builder fail validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use partner_center::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Partner Center access token.")]
    EmptyAccessToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.partnercenter.microsoft.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v1', 'v2', ...")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Locale is invalid.
    #[error("Invalid locale '{locale}'. Expected format: 'll-CC' (e.g., 'en-US').")]
    InvalidLocale {
        /// The invalid locale that was provided.
        locale: String,
    },

    /// Country code is invalid.
    #[error("Invalid country code '{country}'. Expected a two-letter ISO 3166 code (e.g., 'US').")]
    InvalidCountryCode {
        /// The invalid country code that was provided.
        country: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
