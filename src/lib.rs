//! Devcontainer Wizard Library
//!
//! This library provides the core functionality for the interactive
//! devcontainer environment wizard: the version compatibility tables, the
//! dependent-choice resolver, the artifact planner and the renderer.

pub mod chooser;
pub mod cli;
pub mod compat;
pub mod config;
pub mod error;
pub mod planner;
pub mod prompt;
pub mod render;
pub mod resolver;
pub mod sink;
pub mod types;

// Re-export main types for convenience
pub use chooser::{Answer, Chooser, ScriptedChooser};
pub use compat::CompatibilityTable;
pub use config::{EnvironmentConfig, GpuStack, NOT_APPLICABLE};
pub use error::{DevWizError, Result};
pub use planner::{plan, ArtifactSet, ComposeSpec, DevcontainerSpec, DockerfileSpec};
pub use render::{render_all, RenderedArtifacts};
pub use resolver::{ChoiceResolver, Resolution, ResolverDefaults};
pub use sink::{write_artifacts, ArtifactSink, FsSink, MemorySink};
pub use types::{Toggle, UbuntuVersion};
