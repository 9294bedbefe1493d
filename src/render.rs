//! Artifact rendering
//!
//! Serializes the planner's structured records into their target textual
//! formats. Rendering is total and deterministic: the same record always
//! produces byte-identical text, with no timestamps or generated
//! identifiers. All three texts are staged in memory before anything is
//! written, so a failure while rendering leaves the filesystem untouched.

use serde_json::json;
use std::fmt::Write as _;

use crate::planner::{ArtifactSet, ComposeSpec, DevcontainerSpec, DockerfileSpec};

/// Directory all generated files live under, relative to the project root.
pub const OUTPUT_DIR: &str = ".devcontainer";

/// Relative path of the editor/container descriptor.
pub const DEVCONTAINER_PATH: &str = ".devcontainer/devcontainer.json";
/// Relative path of the image build recipe.
pub const DOCKERFILE_PATH: &str = ".devcontainer/Dockerfile";
/// Relative path of the service-composition file.
pub const COMPOSE_PATH: &str = ".devcontainer/docker-compose.yml";

/// The three rendered files, as (relative path, contents) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub files: [(&'static str, String); 3],
}

/// Render every artifact in the set.
pub fn render_all(set: &ArtifactSet) -> RenderedArtifacts {
    RenderedArtifacts {
        files: [
            (DEVCONTAINER_PATH, render_devcontainer(&set.devcontainer)),
            (DOCKERFILE_PATH, render_dockerfile(&set.dockerfile)),
            (COMPOSE_PATH, render_compose(&set.compose)),
        ],
    }
}

/// Render `devcontainer.json`.
///
/// Built as a `serde_json` value and pretty-printed; key order is
/// serde_json's map order, which is stable across runs.
pub fn render_devcontainer(spec: &DevcontainerSpec) -> String {
    let value = json!({
        "name": spec.name,
        "dockerComposeFile": "docker-compose.yml",
        "service": spec.service,
        "workspaceFolder": spec.workspace_folder,
        "initializeCommand": "ls",
        "customizations": {
            "vscode": {
                "settings": {
                    "files.insertFinalNewline": true,
                    "files.trimTrailingWhitespace": true,
                    "files.trimFinalNewlines": true,
                    "[python]": {
                        "editor.defaultFormatter": "ms-python.black-formatter",
                        "editor.formatOnSave": false
                    },
                    "[dockerfile]": {
                        "editor.defaultFormatter": "ms-azuretools.vscode-docker"
                    }
                },
                "extensions": spec.extensions
            }
        }
    });
    // A json! literal of plain fields cannot fail to serialize.
    let mut text = serde_json::to_string_pretty(&value).unwrap_or_default();
    text.push('\n');
    text
}

/// Render the `Dockerfile`: a single FROM line over the planned base image.
pub fn render_dockerfile(spec: &DockerfileSpec) -> String {
    format!("FROM {}\n", spec.base_image)
}

/// Render `docker-compose.yml` in a fixed line-oriented layout.
pub fn render_compose(spec: &ComposeSpec) -> String {
    let mut out = String::new();
    // Infallible: writing to a String cannot fail.
    let _ = writeln!(out, "version: '3.7'");
    let _ = writeln!(out, "services:");
    let _ = writeln!(out, "    {}:", spec.service_name);
    let _ = writeln!(out, "        build:");
    let _ = writeln!(out, "            context: .");
    let _ = writeln!(out, "            dockerfile: Dockerfile");
    let _ = writeln!(out, "        volumes:");
    let _ = writeln!(out, "            - ..:/workspace");
    let _ = writeln!(out, "        environment:");
    for env in &spec.environment {
        let _ = writeln!(out, "            - {}={}", env.key, env.value);
    }
    let _ = writeln!(out, "        command: /bin/bash");
    let _ = writeln!(out, "        tty: true");
    let _ = writeln!(out, "        stdin_open: true");
    let _ = writeln!(out, "        user: root");
    let _ = writeln!(out, "        working_dir: {}", spec.working_dir);
    let _ = writeln!(out, "        networks:");
    let _ = writeln!(out, "            - default");
    let _ = writeln!(out, "        cap_add:");
    for cap in spec.cap_add {
        let _ = writeln!(out, "            - {cap}");
    }
    let _ = writeln!(out, "        security_opt:");
    for opt in spec.security_opt {
        let _ = writeln!(out, "            - {opt}");
    }
    let _ = writeln!(out, "        init: true");
    let _ = writeln!(out, "        shm_size: 2g");
    let _ = writeln!(out, "        expose:");
    for port in spec.ports {
        let _ = writeln!(out, "            - {port}");
    }
    let _ = writeln!(out, "        ports:");
    for port in spec.ports {
        let _ = writeln!(out, "            - \"{port}:{port}\"");
    }
    let _ = writeln!(out, "        labels:");
    for label in spec.labels {
        let _ = writeln!(out, "            - \"{label}\"");
    }
    let _ = writeln!(out, "networks:");
    let _ = writeln!(out, "    default:");
    let _ = writeln!(out, "        external: false");
    let _ = writeln!(out, "        driver: bridge");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnvironmentConfig, GpuStack};
    use crate::planner::plan;
    use crate::types::UbuntuVersion;

    fn sample_set() -> ArtifactSet {
        plan(&EnvironmentConfig {
            project_name: "demo".to_string(),
            user_name: "root".to_string(),
            ubuntu_version: UbuntuVersion::Focal,
            gpu: GpuStack::Cuda {
                cuda_version: "11.7".to_string(),
            },
        })
    }

    #[test]
    fn test_render_is_idempotent() {
        let set = sample_set();
        assert_eq!(render_all(&set), render_all(&set));
        assert_eq!(
            render_devcontainer(&set.devcontainer),
            render_devcontainer(&set.devcontainer)
        );
        assert_eq!(render_compose(&set.compose), render_compose(&set.compose));
    }

    #[test]
    fn test_dockerfile_is_single_from_line() {
        let set = sample_set();
        assert_eq!(
            render_dockerfile(&set.dockerfile),
            "FROM nvidia/cuda:11.7-cudnn8-devel-ubuntu20.04\n"
        );
    }

    #[test]
    fn test_devcontainer_json_is_valid_and_carries_identity() {
        let set = sample_set();
        let text = render_devcontainer(&set.devcontainer);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "demo");
        assert_eq!(value["service"], "demo");
        assert_eq!(value["workspaceFolder"], "/home/root/demo");
        assert_eq!(value["dockerComposeFile"], "docker-compose.yml");
        let extensions = value["customizations"]["vscode"]["extensions"]
            .as_array()
            .unwrap();
        assert!(!extensions.is_empty());
    }

    #[test]
    fn test_compose_carries_environment_and_ports() {
        let set = sample_set();
        let text = render_compose(&set.compose);
        assert!(text.contains("    demo:"));
        assert!(text.contains("- USER=root"));
        assert!(text.contains("- USE_CUDA=yes"));
        assert!(text.contains("- USE_PYTORCH=no"));
        assert!(text.contains("- CUDA_VERSION=11.7"));
        assert!(text.contains("- PYTORCH_VERSION=N/A"));
        assert!(text.contains("working_dir: /workspace/demo"));
        assert!(text.contains("- \"8888:8888\""));
        assert!(text.contains("- \"6006:6006\""));
        assert!(text.contains("- SYS_PTRACE"));
        assert!(text.contains("- seccomp:unconfined"));
    }

    #[test]
    fn test_render_all_targets_fixed_paths() {
        let set = sample_set();
        let rendered = render_all(&set);
        let paths: Vec<&str> = rendered.files.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            paths,
            vec![
                ".devcontainer/devcontainer.json",
                ".devcontainer/Dockerfile",
                ".devcontainer/docker-compose.yml"
            ]
        );
    }
}
