//! Dependent-choice resolution
//!
//! Drives the wizard's strictly ordered chain of decisions and assembles a
//! validated [`EnvironmentConfig`], or reports a clean abort.
//!
//! # Step Sequence
//!
//! ```text
//! Identity -> UbuntuVersion -> CudaDecision -> CudaVersion
//!          -> PytorchDecision -> PytorchVersion -> Confirm -> Done/Aborted
//! ```
//!
//! Transitions are linear except two conditional skips: declining CUDA
//! jumps straight to confirmation, and declining PyTorch skips its version
//! step. Each closed-set question's allowed values and default are pure
//! functions of the earlier answers and the compatibility table, so the
//! whole chain is testable with a scripted chooser.

use tracing::debug;

use crate::chooser::Chooser;
use crate::compat::CompatibilityTable;
use crate::config::{EnvironmentConfig, GpuStack};
use crate::error::{DevWizError, Result};
use crate::types::UbuntuVersion;
use strum::IntoEnumIterator;

/// Outcome of one wizard run.
///
/// Declining the final confirmation is not an error: the run ends cleanly
/// with no configuration and nothing written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Complete(EnvironmentConfig),
    Aborted,
}

/// Ambient defaults injected by the caller.
///
/// The resolver never inspects the process environment itself; the binary
/// passes in the working-directory name and user identity so the chain
/// stays deterministic under test.
#[derive(Debug, Clone)]
pub struct ResolverDefaults {
    pub project_name: String,
    pub user_name: String,
}

/// Walks the dependency chain and assembles a validated configuration.
pub struct ChoiceResolver<'a> {
    table: &'a CompatibilityTable,
    defaults: ResolverDefaults,
}

impl<'a> ChoiceResolver<'a> {
    pub fn new(table: &'a CompatibilityTable, defaults: ResolverDefaults) -> Self {
        Self { table, defaults }
    }

    /// Run the full decision chain against the given chooser.
    ///
    /// Every closed-set answer is re-validated before the configuration is
    /// built; a chooser returning something outside its declared set is a
    /// fatal [`InvalidChoice`](DevWizError::InvalidChoice).
    pub fn resolve(&self, chooser: &mut dyn Chooser) -> Result<Resolution> {
        debug!("wizard step: collect identity");
        let project_name = non_empty(
            chooser.ask("Project name", &self.defaults.project_name)?,
            "project name",
        )?;
        let user_name = non_empty(
            chooser.ask("User name", &self.defaults.user_name)?,
            "user name",
        )?;

        debug!("wizard step: collect Ubuntu version");
        let ubuntu_version = self.ask_ubuntu_version(chooser)?;

        debug!("wizard step: CUDA decision");
        let gpu = if chooser.confirm("Do you want to use CUDA?", true)? {
            let cuda_version = self.ask_cuda_version(chooser, ubuntu_version)?;
            debug!(%cuda_version, "wizard step: PyTorch decision");
            if chooser.confirm("Do you want to use PyTorch?", true)? {
                let pytorch_version = self.ask_pytorch_version(chooser, &cuda_version)?;
                GpuStack::CudaPytorch {
                    cuda_version,
                    pytorch_version,
                }
            } else {
                GpuStack::Cuda { cuda_version }
            }
        } else {
            GpuStack::None
        };

        let config = EnvironmentConfig {
            project_name,
            user_name,
            ubuntu_version,
            gpu,
        };
        config.validate(self.table)?;

        debug!("wizard step: confirm");
        chooser.review(&config);
        if chooser.confirm("Do you want to create the devcontainer configuration?", true)? {
            debug!("wizard done");
            Ok(Resolution::Complete(config))
        } else {
            debug!("wizard aborted at confirmation");
            Ok(Resolution::Aborted)
        }
    }

    fn ask_ubuntu_version(&self, chooser: &mut dyn Chooser) -> Result<UbuntuVersion> {
        let choices: Vec<String> = UbuntuVersion::iter().map(|v| v.to_string()).collect();
        let choice_refs: Vec<&str> = choices.iter().map(|s| s.as_str()).collect();
        let default = UbuntuVersion::default().to_string();
        let answer = chooser.ask_choice("Ubuntu version", &choice_refs, &default)?;
        answer
            .parse()
            .map_err(|_| DevWizError::invalid_choice("Ubuntu version", answer, &choice_refs))
    }

    fn ask_cuda_version(
        &self,
        chooser: &mut dyn Chooser,
        ubuntu: UbuntuVersion,
    ) -> Result<String> {
        let choices = self.table.cuda_options(ubuntu)?;
        let default = self.table.default_cuda(ubuntu)?;
        let answer = chooser.ask_choice("CUDA version", choices, default)?;
        if !choices.contains(&answer.as_str()) {
            return Err(DevWizError::invalid_choice("CUDA version", answer, choices));
        }
        Ok(answer)
    }

    fn ask_pytorch_version(&self, chooser: &mut dyn Chooser, cuda: &str) -> Result<String> {
        let choices = self.table.pytorch_options(cuda)?;
        let default = self.table.default_pytorch(cuda)?;
        let answer = chooser.ask_choice("PyTorch version", choices, default)?;
        if !choices.contains(&answer.as_str()) {
            return Err(DevWizError::invalid_choice(
                "PyTorch version",
                answer,
                choices,
            ));
        }
        Ok(answer)
    }
}

fn non_empty(value: String, field: &str) -> Result<String> {
    if value.trim().is_empty() {
        Err(DevWizError::validation(format!("{field} must not be empty")))
    } else {
        Ok(value)
    }
}
