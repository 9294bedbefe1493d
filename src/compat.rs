//! Version compatibility tables
//!
//! Static mappings describing which CUDA toolkit versions are supported on
//! each Ubuntu release, and which PyTorch releases ship wheels built against
//! each CUDA version.
//!
//! # Design
//!
//! - **Pure data**: No I/O, no side effects — only lookups
//! - **Ordered**: Each sequence is oldest-first; the *last* element is the
//!   recommended default (newest supported version)
//! - **Closed**: A lookup on an unrecognized key is an [`UnknownKey`]
//!   error, never an empty result — an unknown key means the tables
//!   themselves are inconsistent
//!
//! [`UnknownKey`]: crate::error::DevWizError::UnknownKey

use crate::error::{DevWizError, Result};
use crate::types::UbuntuVersion;

/// Supported CUDA versions per Ubuntu release, oldest first.
const UBUNTU_CUDA: &[(UbuntuVersion, &[&str])] = &[
    (UbuntuVersion::Focal, &["11.3", "11.6", "11.7", "11.8"]),
    (UbuntuVersion::Jammy, &["11.7", "11.8", "12.1"]),
];

/// PyTorch releases with wheels for each CUDA version, oldest first.
const CUDA_PYTORCH: &[(&str, &[&str])] = &[
    ("11.3", &["1.11.0", "1.12.1"]),
    ("11.6", &["1.12.1", "1.13.1"]),
    ("11.7", &["1.13.1", "2.0.1"]),
    ("11.8", &["2.0.1", "2.1.0"]),
    ("12.1", &["2.1.0", "2.2.0"]),
];

/// Read-only compatibility lookups over the static version tables.
///
/// Safe to share across callers; all methods borrow `'static` data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityTable;

impl CompatibilityTable {
    pub fn new() -> Self {
        Self
    }

    /// CUDA versions supported on the given Ubuntu release.
    ///
    /// The returned slice is non-empty and ordered oldest-first; use
    /// [`Self::default_cuda`] for the recommended (newest) entry.
    pub fn cuda_options(&self, ubuntu: UbuntuVersion) -> Result<&'static [&'static str]> {
        UBUNTU_CUDA
            .iter()
            .find(|(key, _)| *key == ubuntu)
            .map(|(_, versions)| *versions)
            .ok_or_else(|| DevWizError::unknown_key("Ubuntu", ubuntu.to_string()))
    }

    /// PyTorch versions with wheels built against the given CUDA version.
    pub fn pytorch_options(&self, cuda_version: &str) -> Result<&'static [&'static str]> {
        CUDA_PYTORCH
            .iter()
            .find(|(key, _)| *key == cuda_version)
            .map(|(_, versions)| *versions)
            .ok_or_else(|| DevWizError::unknown_key("CUDA", cuda_version))
    }

    /// Recommended CUDA version for an Ubuntu release (newest supported).
    pub fn default_cuda(&self, ubuntu: UbuntuVersion) -> Result<&'static str> {
        let options = self.cuda_options(ubuntu)?;
        Ok(options[options.len() - 1])
    }

    /// Recommended PyTorch version for a CUDA version (newest supported).
    pub fn default_pytorch(&self, cuda_version: &str) -> Result<&'static str> {
        let options = self.pytorch_options(cuda_version)?;
        Ok(options[options.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cuda_options_non_empty_for_all_ubuntu() {
        let table = CompatibilityTable::new();
        for ubuntu in UbuntuVersion::iter() {
            let options = table.cuda_options(ubuntu).unwrap();
            assert!(!options.is_empty(), "no CUDA versions for {}", ubuntu);
        }
    }

    #[test]
    fn test_default_cuda_is_last_option() {
        let table = CompatibilityTable::new();
        for ubuntu in UbuntuVersion::iter() {
            let options = table.cuda_options(ubuntu).unwrap();
            assert_eq!(table.default_cuda(ubuntu).unwrap(), *options.last().unwrap());
        }
    }

    #[test]
    fn test_every_reachable_cuda_has_pytorch_options() {
        // Cross-reference invariant: each CUDA version listed under any
        // Ubuntu release must be a key of the PyTorch table.
        let table = CompatibilityTable::new();
        for ubuntu in UbuntuVersion::iter() {
            for cuda in table.cuda_options(ubuntu).unwrap() {
                let options = table.pytorch_options(cuda).unwrap();
                assert!(!options.is_empty(), "no PyTorch versions for CUDA {}", cuda);
            }
        }
    }

    #[test]
    fn test_default_pytorch_is_last_option() {
        let table = CompatibilityTable::new();
        for (cuda, _) in CUDA_PYTORCH {
            let options = table.pytorch_options(cuda).unwrap();
            assert_eq!(
                table.default_pytorch(cuda).unwrap(),
                *options.last().unwrap()
            );
        }
    }

    #[test]
    fn test_unknown_cuda_is_an_error() {
        let table = CompatibilityTable::new();
        let err = table.pytorch_options("9.0").unwrap_err();
        assert!(matches!(
            err,
            DevWizError::UnknownKey { kind: "CUDA", .. }
        ));
    }

    #[test]
    fn test_jammy_options() {
        let table = CompatibilityTable::new();
        let options = table.cuda_options(UbuntuVersion::Jammy).unwrap();
        assert_eq!(options, &["11.7", "11.8", "12.1"]);
        assert_eq!(table.default_cuda(UbuntuVersion::Jammy).unwrap(), "12.1");
    }
}
