//! One conversion pass: load, choose the step source, assemble, write.
use crate::artifact::{write_artifact, Artifact};
use crate::cli::Args;
use crate::manifest::load_manifest;
use crate::output_xml::load_output_xml;
use crate::paths::RunPaths;
use crate::slug::sanitize_id;
use crate::steps::extract_steps;
use anyhow::Result;

/// Title used when the result has no named root suite.
pub const DEFAULT_SUITE_TITLE: &str = "Robot Suite";

/// Run the conversion described by `args`.
pub fn run(args: &Args) -> Result<()> {
    let paths = RunPaths::resolve(
        &args.output_xml,
        &args.output_dir,
        &args.artifacts_json,
        args.manifest_path.as_deref(),
    )?;

    let result = load_output_xml(paths.output_xml())?;
    let title = result
        .suite_name
        .clone()
        .unwrap_or_else(|| DEFAULT_SUITE_TITLE.to_string());
    let scenario_id = match args.suite_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => sanitize_id(&title),
    };

    let mut artifact = match load_manifest(paths.manifest())? {
        Some(manifest) => {
            tracing::info!(path = %paths.manifest().display(), "using video manifest steps");
            Artifact::from_manifest(scenario_id, title, manifest)
        }
        None => {
            let steps = extract_steps(&result.keywords, &paths);
            tracing::info!(steps = steps.len(), "extracted doc steps");
            Artifact::from_extraction(scenario_id, title, steps)
        }
    };
    if artifact.backfill_video(args.video_path.as_deref()) {
        tracing::info!(video = ?artifact.video_path, "video path taken from --video-path");
    }

    write_artifact(paths.artifacts_json(), &artifact)
}
