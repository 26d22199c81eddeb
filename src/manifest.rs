//! Externally produced video manifest.
//!
//! When the manifest file exists its steps replace extraction entirely.
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parsed `unity-manifest.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoManifest {
    /// Steps passed through verbatim; `[]` when absent or null.
    #[serde(default)]
    pub steps: Value,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub raw_video_path: Option<String>,
}

fn empty_steps() -> Value {
    Value::Array(Vec::new())
}

/// Load the manifest if present. A present but malformed file is an error.
pub fn load_manifest(path: &Path) -> Result<Option<VideoManifest>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no manifest");
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("read manifest {}", path.display()))?;
    let value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse manifest JSON {}", path.display()))?;
    if !value.is_object() {
        return Err(anyhow!(
            "manifest {} is not a JSON object",
            path.display()
        ));
    }
    let mut manifest: VideoManifest = serde_json::from_value(value)
        .with_context(|| format!("parse manifest fields {}", path.display()))?;
    if manifest.steps.is_null() {
        manifest.steps = empty_steps();
    }
    Ok(Some(manifest))
}
