//! CLI argument parsing for the output.xml conversion.
//!
//! Flags mirror what the run orchestrator passes; all of them take a value.
use clap::Parser;
use std::path::PathBuf;

/// Convert a Robot Framework result into a run-artifacts JSON file.
#[derive(Parser, Debug)]
#[command(
    name = "robot-artifacts",
    version,
    about = "Convert Robot Framework output.xml into run-artifacts JSON",
    after_help = "Example:\n  robot-artifacts --output-xml out/output.xml --output-dir out --artifacts-json out/artifacts.json\n\nSet RUST_LOG=info (or debug) for a transcript on stderr."
)]
pub struct Args {
    /// Robot Framework result file
    #[arg(long, value_name = "PATH")]
    pub output_xml: PathBuf,

    /// Run output directory; screenshots are predicted under <DIR>/screenshots
    #[arg(long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Destination for the artifacts JSON
    #[arg(long, value_name = "PATH")]
    pub artifacts_json: PathBuf,

    /// Scenario id to use verbatim instead of the sanitized suite name
    #[arg(long, value_name = "ID")]
    pub suite_id: Option<String>,

    /// Video file used when the manifest does not provide one
    #[arg(long, value_name = "PATH")]
    pub video_path: Option<String>,

    /// Video manifest location [default: <output-dir>/unity-manifest.json]
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,
}
