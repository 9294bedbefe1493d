//! Artifact planner
//!
//! Translates a resolved [`EnvironmentConfig`] into the three structured
//! artifact records that back the generated files. Planning is separate
//! from rendering so the outputs cannot drift apart: all three records are
//! projected from the same immutable snapshot, and the renderer does
//! nothing but field substitution.
//!
//! # Base Image Rule
//!
//! | GPU stack        | Base image |
//! |------------------|------------|
//! | None             | `ubuntu:<ubuntu_version>` |
//! | Cuda             | `nvidia/cuda:<cuda>-cudnn8-devel-ubuntu20.04` |
//! | CudaPytorch      | `pytorch/pytorch:<pt>-cuda<cuda>-cudnn8-runtime` |
//!
//! The match over [`GpuStack`] is exhaustive; no fourth shape is
//! constructible.
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects — only builds the records
//! - **Typed output**: Each record maps directly to one rendered file

use crate::config::{EnvironmentConfig, GpuStack};

/// Root of the bind mount inside the container.
pub const MOUNT_ROOT: &str = "/workspace";

/// Ports exposed and published by the generated compose service
/// (Jupyter and TensorBoard).
pub const SERVICE_PORTS: &[u16] = &[8888, 6006];

/// Capabilities added to the service (debugger support).
pub const CAP_ADD: &[&str] = &["SYS_PTRACE"];

/// Security options disabling seccomp/apparmor confinement for the
/// development container.
pub const SECURITY_OPT: &[&str] = &["seccomp:unconfined", "apparmor:unconfined"];

/// Fixed VS Code remote-containers labels carried on the service.
///
/// The session id is a constant so rendered output stays byte-identical
/// across runs.
pub const SERVICE_LABELS: &[&str] = &[
    "com.microsoft.created-by=visual-studio-code",
    "com.microsoft.visual-studio-code.remote-containers=true",
    "com.microsoft.visual-studio-code.remote-containers.session-id=4b5f9b9e-5c2e-4c5b-8e0b-6e3b3b7e3b6f",
];

/// VS Code extensions recommended in the editor descriptor.
pub const EDITOR_EXTENSIONS: &[&str] = &[
    "mhutchie.git-graph",
    "foxundermoon.shell-format",
    "ms-azuretools.vscode-docker",
    "GitHub.vscode-pull-request-github",
    "redhat.vscode-yaml",
    "yzhang.markdown-all-in-one",
    "GitHub.copilot",
    "tht13.python",
    "ms-python.python",
    "ms-toolsai.jupyter",
    "ms-python.vscode-pylance",
    "KevinRose.vsc-python-indent",
    "ms-python.black-formatter",
];

/// Editor/container descriptor backing `devcontainer.json`.
///
/// Independent of the GPU stack: only identity fields vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevcontainerSpec {
    pub name: String,
    pub service: String,
    pub workspace_folder: String,
    pub extensions: &'static [&'static str],
}

/// Build recipe backing the `Dockerfile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerfileSpec {
    pub base_image: String,
}

/// One `KEY=value` environment entry in the compose service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: &'static str,
    pub value: String,
}

/// Service-composition descriptor backing `docker-compose.yml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeSpec {
    pub service_name: String,
    pub environment: Vec<EnvVar>,
    pub working_dir: String,
    pub ports: &'static [u16],
    pub cap_add: &'static [&'static str],
    pub security_opt: &'static [&'static str],
    pub labels: &'static [&'static str],
}

/// The three records derived from one configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub devcontainer: DevcontainerSpec,
    pub dockerfile: DockerfileSpec,
    pub compose: ComposeSpec,
}

/// Derive all three artifact records from a validated configuration.
pub fn plan(config: &EnvironmentConfig) -> ArtifactSet {
    ArtifactSet {
        devcontainer: plan_devcontainer(config),
        dockerfile: plan_dockerfile(config),
        compose: plan_compose(config),
    }
}

fn plan_devcontainer(config: &EnvironmentConfig) -> DevcontainerSpec {
    DevcontainerSpec {
        name: config.project_name.clone(),
        service: config.project_name.clone(),
        workspace_folder: format!("/home/{}/{}", config.user_name, config.project_name),
        extensions: EDITOR_EXTENSIONS,
    }
}

fn plan_dockerfile(config: &EnvironmentConfig) -> DockerfileSpec {
    let base_image = match &config.gpu {
        GpuStack::None => format!("ubuntu:{}", config.ubuntu_version),
        // CUDA-only images always use the 20.04 devel variant; nvidia does
        // not publish cudnn8 devel tags for every (CUDA, Ubuntu) pair.
        GpuStack::Cuda { cuda_version } => {
            format!("nvidia/cuda:{cuda_version}-cudnn8-devel-ubuntu20.04")
        }
        GpuStack::CudaPytorch {
            cuda_version,
            pytorch_version,
        } => format!("pytorch/pytorch:{pytorch_version}-cuda{cuda_version}-cudnn8-runtime"),
    };
    DockerfileSpec { base_image }
}

fn plan_compose(config: &EnvironmentConfig) -> ComposeSpec {
    let environment = vec![
        EnvVar {
            key: "USER",
            value: config.user_name.clone(),
        },
        EnvVar {
            key: "USE_CUDA",
            value: config.gpu.cuda_enabled().to_string(),
        },
        EnvVar {
            key: "USE_PYTORCH",
            value: config.gpu.pytorch_enabled().to_string(),
        },
        EnvVar {
            key: "PYTORCH_VERSION",
            value: config.gpu.pytorch_version_label().to_string(),
        },
        EnvVar {
            key: "CUDA_VERSION",
            value: config.gpu.cuda_version_label().to_string(),
        },
    ];
    ComposeSpec {
        service_name: config.project_name.clone(),
        environment,
        working_dir: format!("{MOUNT_ROOT}/{}", config.project_name),
        ports: SERVICE_PORTS,
        cap_add: CAP_ADD,
        security_opt: SECURITY_OPT,
        labels: SERVICE_LABELS,
    }
}
