use clap::Parser;

/// devcontainer-wizard - generate a VS Code devcontainer environment
///
/// Runs an interactive wizard that collects the project identity, Ubuntu
/// base version and optional CUDA/PyTorch support, then writes a
/// consistent devcontainer.json, Dockerfile and docker-compose.yml.
#[derive(Parser, Debug)]
#[command(name = "devwiz")]
#[command(about = "An interactive wizard for generating devcontainer environments")]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
