//! Output sink abstraction
//!
//! The renderer produces text; writing it somewhere is a separate concern.
//! [`FsSink`] writes beneath a root directory, creating parent directories
//! as needed and overwriting existing files. [`MemorySink`] collects writes
//! in memory for tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::render::RenderedArtifacts;

/// Destination for rendered artifact text.
pub trait ArtifactSink {
    /// Write `contents` at `path` (relative to the sink's root),
    /// creating parent directories and overwriting any existing file.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// Filesystem sink rooted at a base directory.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for FsSink {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %target.display(), bytes = contents.len(), "writing artifact");
        fs::write(&target, contents)?;
        Ok(())
    }
}

/// In-memory sink for tests; records every write keyed by path.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Write every staged artifact through the sink.
///
/// Rendering happens before this is called, so an error here is purely an
/// IO failure from the sink.
pub fn write_artifacts(sink: &mut dyn ArtifactSink, rendered: &RenderedArtifacts) -> Result<()> {
    for (path, contents) in &rendered.files {
        sink.write(Path::new(path), contents)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_sink_creates_parent_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsSink::new(dir.path());

        let path = Path::new(".devcontainer/Dockerfile");
        sink.write(path, "FROM ubuntu:20.04\n").unwrap();
        sink.write(path, "FROM ubuntu:22.04\n").unwrap();

        let written = fs::read_to_string(dir.path().join(path)).unwrap();
        assert_eq!(written, "FROM ubuntu:22.04\n");
    }

    #[test]
    fn test_memory_sink_records_writes() {
        let mut sink = MemorySink::new();
        sink.write(Path::new("a/b.txt"), "hello").unwrap();
        assert_eq!(
            sink.files.get(Path::new("a/b.txt")).map(String::as_str),
            Some("hello")
        );
    }
}
