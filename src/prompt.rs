//! Interactive terminal prompts
//!
//! Thin dialoguer/console wrappers around the wizard core: a terminal
//! [`Chooser`] implementation, the pre-confirmation summary table, and the
//! created-files tree shown on success. No decision logic lives here.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::chooser::Chooser;
use crate::config::EnvironmentConfig;
use crate::error::{DevWizError, Result};
use crate::render::{COMPOSE_PATH, DEVCONTAINER_PATH, DOCKERFILE_PATH, OUTPUT_DIR};

/// Chooser backed by interactive terminal prompts.
///
/// Closed-set questions use a selection menu, so the answer is always one
/// of the offered choices; the resolver's re-validation never fires for
/// this implementation unless the terminal layer itself misbehaves.
#[derive(Default)]
pub struct TermChooser {
    theme: ColorfulTheme,
}

impl TermChooser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Chooser for TermChooser {
    fn ask(&mut self, label: &str, default: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| DevWizError::prompt(e.to_string()))
    }

    fn ask_choice(&mut self, label: &str, choices: &[&str], default: &str) -> Result<String> {
        let default_index = choices.iter().position(|c| *c == default).unwrap_or(0);
        let index = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(choices)
            .default(default_index)
            .interact()
            .map_err(|e| DevWizError::prompt(e.to_string()))?;
        Ok(choices[index].to_string())
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(default)
            .interact()
            .map_err(|e| DevWizError::prompt(e.to_string()))
    }

    fn review(&mut self, config: &EnvironmentConfig) {
        print_summary(config);
    }
}

/// Print the banner shown when the wizard starts.
pub fn print_banner() {
    println!(
        "{}",
        style("Creating a new devcontainer configuration").blue().bold()
    );
}

/// Print the tentative configuration ahead of the final confirmation.
pub fn print_summary(config: &EnvironmentConfig) {
    println!();
    println!("{}", style("New environment configuration").bold());
    print_row("Project name", &config.project_name);
    print_row("User name", &config.user_name);
    print_row("Ubuntu version", &config.ubuntu_version.to_string());
    print_row("CUDA version", config.gpu.cuda_version_label());
    print_row("PyTorch version", config.gpu.pytorch_version_label());
    println!();
}

fn print_row(label: &str, value: &str) {
    println!("  {:<16} {}", label, style(value).green().bold());
}

/// Print the tree of created files after a successful run.
pub fn print_created_tree() {
    println!(
        "{}",
        style("Configuration files created successfully").green()
    );
    println!("{}", style(OUTPUT_DIR).bold());
    for path in [DEVCONTAINER_PATH, DOCKERFILE_PATH, COMPOSE_PATH] {
        // Strip the shared directory prefix for display.
        let name = path.rsplit('/').next().unwrap_or(path);
        println!("  - {name}");
    }
}

/// Print the abort notice when the user declines the confirmation.
pub fn print_aborted() {
    println!("{}", style("Aborted").red());
}
