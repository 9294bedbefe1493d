//! Type-safe configuration types for the devcontainer wizard
//!
//! This module replaces stringly-typed configuration with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Ubuntu base version for the container image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum UbuntuVersion {
    #[default]
    #[strum(serialize = "20.04")]
    Focal,
    #[strum(serialize = "22.04")]
    Jammy,
}

/// Generic Yes/No toggle for boolean-like options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Toggle {
    #[default]
    #[strum(serialize = "yes")]
    Yes,
    #[strum(serialize = "no")]
    No,
}

impl Toggle {
    /// Convert to boolean
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ubuntu_version_serialization() {
        assert_eq!(UbuntuVersion::Focal.to_string(), "20.04");
        assert_eq!(UbuntuVersion::Jammy.to_string(), "22.04");
    }

    #[test]
    fn test_ubuntu_version_parsing() {
        assert_eq!(UbuntuVersion::from_str("20.04").unwrap(), UbuntuVersion::Focal);
        assert_eq!(UbuntuVersion::from_str("22.04").unwrap(), UbuntuVersion::Jammy);
        assert!(UbuntuVersion::from_str("18.04").is_err());
    }

    #[test]
    fn test_ubuntu_version_iteration() {
        let versions: Vec<String> = UbuntuVersion::iter().map(|v| v.to_string()).collect();
        assert_eq!(versions, vec!["20.04", "22.04"]);
    }

    #[test]
    fn test_toggle_conversion() {
        assert!(Toggle::Yes.as_bool());
        assert!(!Toggle::No.as_bool());
        assert_eq!(Toggle::from(true), Toggle::Yes);
        assert_eq!(Toggle::from(false), Toggle::No);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(UbuntuVersion::default(), UbuntuVersion::Focal);
        assert_eq!(Toggle::default(), Toggle::Yes);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = UbuntuVersion::Jammy;
        let json = serde_json::to_string(&original).unwrap();
        let parsed: UbuntuVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
