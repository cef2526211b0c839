//! Partner Center API version definitions.
//!
//! This module provides the [`ApiVersion`] enum used as the first path
//! segment of every request (e.g., `/v1/customers`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Partner Center API version.
///
/// The service exposes a single stable surface, `v1`. The `Custom` variant
/// carries any other `v<N>` segment for preview or future surfaces.
///
/// # Example
///
/// ```rust
/// use partner_center::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "v1");
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::Custom("v2".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version `v1`.
    V1,
    /// Custom `v<N>` version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns `true` for known stable versions.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::V1)
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.strip_prefix('v')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" => Ok(Self::V1),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!(" V1 ".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
    }

    #[test]
    fn test_api_version_parses_custom_versions() {
        let version: ApiVersion = "v3".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("v3".to_string()));
        assert!(!version.is_stable());
    }

    #[test]
    fn test_api_version_rejects_invalid_format() {
        assert!(matches!(
            "2024-10".parse::<ApiVersion>(),
            Err(ConfigError::InvalidApiVersion { .. })
        ));
        assert!("v".parse::<ApiVersion>().is_err());
        assert!("vx".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_display_and_latest() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V1);
        assert_eq!(ApiVersion::V1.to_string(), "v1");
        assert!(ApiVersion::latest().is_stable());
    }
}
