//! devcontainer-wizard - Main entry point
//!
//! Wires the interactive chooser, the choice resolver, the artifact
//! planner and the filesystem sink together into one wizard run.

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use devwizard::cli::Cli;
use devwizard::prompt::{self, TermChooser};
use devwizard::{
    plan, render_all, write_artifacts, ChoiceResolver, CompatibilityTable, FsSink, Resolution,
    ResolverDefaults,
};

/// Initialize tracing; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Ambient defaults for identity questions: the current directory name
/// and `$USER`, with fallbacks when either is unavailable.
fn ambient_defaults() -> ResolverDefaults {
    let project_name = std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string());
    let user_name = std::env::var("USER").unwrap_or_else(|_| "root".to_string());
    ResolverDefaults {
        project_name,
        user_name,
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let _cli = Cli::parse_args();
    info!("devcontainer wizard starting up");

    prompt::print_banner();

    let table = CompatibilityTable::new();
    let defaults = ambient_defaults();
    debug!(?defaults, "ambient defaults collected");

    let resolver = ChoiceResolver::new(&table, defaults);
    let mut chooser = TermChooser::new();
    let config = match resolver.resolve(&mut chooser)? {
        Resolution::Complete(config) => config,
        Resolution::Aborted => {
            prompt::print_aborted();
            return Ok(());
        }
    };

    // Stage all three artifacts before touching the filesystem.
    let artifacts = plan(&config);
    let rendered = render_all(&artifacts);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let mut sink = FsSink::new(&cwd);
    write_artifacts(&mut sink, &rendered)
        .context("Failed to write devcontainer configuration files")?;

    info!(project = %config.project_name, "configuration files written");
    prompt::print_created_tree();
    Ok(())
}
