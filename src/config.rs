//! Resolved environment configuration
//!
//! [`EnvironmentConfig`] is the immutable record produced by the resolver
//! once every dependent choice has been validated. It is the single source
//! of truth for the artifact planner: all three generated files are derived
//! from one snapshot, so they cannot disagree on identity or version fields.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::compat::CompatibilityTable;
use crate::error::{DevWizError, Result};
use crate::types::{Toggle, UbuntuVersion};

/// Placeholder emitted for version fields that do not apply.
///
/// The generated compose file embeds this literal in environment variables
/// (`CUDA_VERSION=N/A` when CUDA is disabled), so it is a documented
/// constant rather than an arbitrary string.
pub const NOT_APPLICABLE: &str = "N/A";

/// GPU/deep-learning layer of the environment.
///
/// PyTorch support requires CUDA support, so the dependency is encoded in
/// the shape of the enum: there is no variant with PyTorch but no CUDA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GpuStack {
    /// CPU-only environment.
    None,
    /// CUDA toolkit, no deep-learning runtime.
    Cuda { cuda_version: String },
    /// CUDA toolkit plus a matching PyTorch release.
    CudaPytorch {
        cuda_version: String,
        pytorch_version: String,
    },
}

impl GpuStack {
    pub fn cuda_enabled(&self) -> Toggle {
        Toggle::from(!matches!(self, Self::None))
    }

    pub fn pytorch_enabled(&self) -> Toggle {
        Toggle::from(matches!(self, Self::CudaPytorch { .. }))
    }

    /// CUDA version label for output, [`NOT_APPLICABLE`] when disabled.
    pub fn cuda_version_label(&self) -> &str {
        match self {
            Self::None => NOT_APPLICABLE,
            Self::Cuda { cuda_version } | Self::CudaPytorch { cuda_version, .. } => cuda_version,
        }
    }

    /// PyTorch version label for output, [`NOT_APPLICABLE`] when disabled.
    pub fn pytorch_version_label(&self) -> &str {
        match self {
            Self::CudaPytorch { pytorch_version, .. } => pytorch_version,
            _ => NOT_APPLICABLE,
        }
    }
}

/// A fully resolved, validated environment configuration.
///
/// Constructed once by the resolver after all dependent choices succeed,
/// read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub project_name: String,
    pub user_name: String,
    pub ubuntu_version: UbuntuVersion,
    pub gpu: GpuStack,
}

impl EnvironmentConfig {
    /// Validate the configuration against the compatibility tables.
    ///
    /// The resolver only ever assembles configurations from closed-set
    /// answers, so this re-check is defense in depth: it catches a chooser
    /// that violated its contract, and files loaded from disk.
    pub fn validate(&self, table: &CompatibilityTable) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(DevWizError::validation("project name must not be empty"));
        }
        if self.user_name.trim().is_empty() {
            return Err(DevWizError::validation("user name must not be empty"));
        }

        let allowed_cuda = table.cuda_options(self.ubuntu_version)?;
        match &self.gpu {
            GpuStack::None => {}
            GpuStack::Cuda { cuda_version } => {
                if !allowed_cuda.contains(&cuda_version.as_str()) {
                    return Err(DevWizError::invalid_choice(
                        "CUDA version",
                        cuda_version.as_str(),
                        allowed_cuda,
                    ));
                }
            }
            GpuStack::CudaPytorch {
                cuda_version,
                pytorch_version,
            } => {
                if !allowed_cuda.contains(&cuda_version.as_str()) {
                    return Err(DevWizError::invalid_choice(
                        "CUDA version",
                        cuda_version.as_str(),
                        allowed_cuda,
                    ));
                }
                let allowed_pytorch = table.pytorch_options(cuda_version)?;
                if !allowed_pytorch.contains(&pytorch_version.as_str()) {
                    return Err(DevWizError::invalid_choice(
                        "PyTorch version",
                        pytorch_version.as_str(),
                        allowed_pytorch,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;
        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu_config() -> EnvironmentConfig {
        EnvironmentConfig {
            project_name: "demo".to_string(),
            user_name: "root".to_string(),
            ubuntu_version: UbuntuVersion::Focal,
            gpu: GpuStack::None,
        }
    }

    #[test]
    fn test_pytorch_implies_cuda() {
        // The invariant is structural: any stack reporting PyTorch enabled
        // must also report CUDA enabled.
        let stacks = [
            GpuStack::None,
            GpuStack::Cuda {
                cuda_version: "11.7".to_string(),
            },
            GpuStack::CudaPytorch {
                cuda_version: "11.7".to_string(),
                pytorch_version: "1.13.1".to_string(),
            },
        ];
        for stack in stacks {
            if stack.pytorch_enabled().as_bool() {
                assert!(stack.cuda_enabled().as_bool());
            }
        }
    }

    #[test]
    fn test_version_labels_use_sentinel() {
        let stack = GpuStack::None;
        assert_eq!(stack.cuda_version_label(), NOT_APPLICABLE);
        assert_eq!(stack.pytorch_version_label(), NOT_APPLICABLE);

        let stack = GpuStack::Cuda {
            cuda_version: "11.8".to_string(),
        };
        assert_eq!(stack.cuda_version_label(), "11.8");
        assert_eq!(stack.pytorch_version_label(), NOT_APPLICABLE);
    }

    #[test]
    fn test_validate_accepts_cpu_config() {
        let table = CompatibilityTable::new();
        cpu_config().validate(&table).unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_project_name() {
        let table = CompatibilityTable::new();
        let mut config = cpu_config();
        config.project_name = "  ".to_string();
        assert!(matches!(
            config.validate(&table).unwrap_err(),
            DevWizError::Validation(_)
        ));
    }

    #[test]
    fn test_validate_rejects_cuda_outside_ubuntu_set() {
        let table = CompatibilityTable::new();
        let mut config = cpu_config();
        // 12.1 is valid on 22.04 but not on 20.04
        config.gpu = GpuStack::Cuda {
            cuda_version: "12.1".to_string(),
        };
        assert!(matches!(
            config.validate(&table).unwrap_err(),
            DevWizError::InvalidChoice { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_mismatched_pytorch() {
        let table = CompatibilityTable::new();
        let mut config = cpu_config();
        config.gpu = GpuStack::CudaPytorch {
            cuda_version: "11.7".to_string(),
            pytorch_version: "2.2.0".to_string(), // needs CUDA 12.1
        };
        assert!(matches!(
            config.validate(&table).unwrap_err(),
            DevWizError::InvalidChoice { .. }
        ));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.json");
        let config = EnvironmentConfig {
            project_name: "demo".to_string(),
            user_name: "dev".to_string(),
            ubuntu_version: UbuntuVersion::Jammy,
            gpu: GpuStack::CudaPytorch {
                cuda_version: "12.1".to_string(),
                pytorch_version: "2.2.0".to_string(),
            },
        };
        config.save_to_file(&path).unwrap();
        let loaded = EnvironmentConfig::load_from_file(&path).unwrap();
        assert_eq!(config, loaded);
    }
}
