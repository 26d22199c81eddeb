//! Typed paths for one conversion run.
//!
//! Every derived location (screenshots, default manifest) is computed here so
//! extraction and orchestration agree on the layout.
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Manifest file name looked up under the output directory by default.
pub const DEFAULT_MANIFEST_NAME: &str = "unity-manifest.json";

const SCREENSHOTS_DIR: &str = "screenshots";

/// Resolved locations for a single run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    output_xml: PathBuf,
    output_dir: PathBuf,
    artifacts_json: PathBuf,
    manifest: PathBuf,
}

impl RunPaths {
    /// Resolve CLI-provided paths to absolute ones.
    pub fn resolve(
        output_xml: &Path,
        output_dir: &Path,
        artifacts_json: &Path,
        manifest: Option<&Path>,
    ) -> Result<Self> {
        let output_dir = resolve_path(output_dir)?;
        let manifest = match manifest {
            Some(path) => resolve_path(path)?,
            None => output_dir.join(DEFAULT_MANIFEST_NAME),
        };
        Ok(Self {
            output_xml: resolve_path(output_xml)?,
            artifacts_json: resolve_path(artifacts_json)?,
            output_dir,
            manifest,
        })
    }

    /// Build paths rooted at an already-absolute output directory.
    #[cfg(test)]
    pub fn for_output_dir(output_dir: PathBuf) -> Self {
        Self {
            output_xml: output_dir.join("output.xml"),
            artifacts_json: output_dir.join("artifacts.json"),
            manifest: output_dir.join(DEFAULT_MANIFEST_NAME),
            output_dir,
        }
    }

    /// Return the Robot result file path.
    pub fn output_xml(&self) -> &Path {
        &self.output_xml
    }

    /// Return the artifact destination path.
    pub fn artifacts_json(&self) -> &Path {
        &self.artifacts_json
    }

    /// Return the manifest path, explicit or defaulted.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// Return the `screenshots/` directory under the output directory.
    pub fn screenshots_dir(&self) -> PathBuf {
        self.output_dir.join(SCREENSHOTS_DIR)
    }

    /// Return the predicted screenshot path for a step; not checked on disk.
    pub fn screenshot_path(&self, step_id: &str) -> PathBuf {
        self.screenshots_dir().join(format!("{step_id}.png"))
    }
}

/// Canonicalize existing paths; anchor missing ones at the current directory.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        path.canonicalize()
            .with_context(|| format!("resolve {}", path.display()))
    } else {
        std::path::absolute(path).with_context(|| format!("resolve {}", path.display()))
    }
}
