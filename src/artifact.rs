//! Run-artifact record and its serialized shape.
use crate::manifest::VideoManifest;
use crate::staging::write_json_atomic;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// One documented action within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    pub image_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at_ms: Option<i64>,
}

/// Where the artifact steps came from. Exactly one source per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Steps {
    Extracted(Vec<Step>),
    /// The manifest `steps` value, untouched.
    Manifest(Value),
}

impl Steps {
    pub fn count(&self) -> usize {
        match self {
            Steps::Extracted(steps) => steps.len(),
            Steps::Manifest(Value::Array(steps)) => steps.len(),
            Steps::Manifest(_) => 0,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Steps::Extracted(_) => "extraction",
            Steps::Manifest(_) => "manifest",
        }
    }
}

/// Output record for one scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub scenario_id: String,
    pub title: String,
    pub steps: Steps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_video_path: Option<String>,
}

impl Artifact {
    pub fn from_extraction(scenario_id: String, title: String, steps: Vec<Step>) -> Self {
        Self {
            scenario_id,
            title,
            steps: Steps::Extracted(steps),
            video_path: None,
            raw_video_path: None,
        }
    }

    pub fn from_manifest(scenario_id: String, title: String, manifest: VideoManifest) -> Self {
        Self {
            scenario_id,
            title,
            steps: Steps::Manifest(manifest.steps),
            video_path: manifest.video_path,
            raw_video_path: manifest.raw_video_path,
        }
    }

    /// Use `candidate` as the video when nothing set one and the file exists.
    ///
    /// Returns whether the candidate was applied. The candidate string is kept
    /// as given.
    pub fn backfill_video(&mut self, candidate: Option<&str>) -> bool {
        let Some(candidate) = candidate.filter(|path| !path.is_empty()) else {
            return false;
        };
        if self.video_path.as_deref().is_some_and(|path| !path.is_empty()) {
            tracing::debug!(candidate, "video already set; backfill skipped");
            return false;
        }
        if !Path::new(candidate).exists() {
            tracing::debug!(candidate, "video candidate missing; backfill skipped");
            return false;
        }
        self.video_path = Some(candidate.to_string());
        self.raw_video_path = Some(candidate.to_string());
        true
    }
}

/// Serialize the artifact as pretty JSON, replacing `path` atomically.
pub fn write_artifact(path: &Path, artifact: &Artifact) -> Result<()> {
    write_json_atomic(path, artifact)?;
    tracing::info!(
        path = %path.display(),
        steps = artifact.steps.count(),
        source = artifact.steps.source(),
        "artifact written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
