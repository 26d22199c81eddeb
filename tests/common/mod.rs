//! Shared test infrastructure for integration tests.

use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

/// A scratch run directory seeded with a fixture `output.xml`.
pub struct RunFixture {
    pub temp: TempDir,
    pub output_xml: PathBuf,
    pub output_dir: PathBuf,
    pub artifacts_json: PathBuf,
}

impl RunFixture {
    /// Copy `tests/fixtures/{name}/output.xml` into a fresh run directory.
    pub fn load(name: &str) -> Self {
        let source = manifest_dir()
            .join("tests/fixtures")
            .join(name)
            .join("output.xml");
        let temp = tempfile::tempdir().expect("create temp dir");
        let output_dir = temp.path().join("run");
        std::fs::create_dir_all(&output_dir).expect("create run dir");
        let output_xml = output_dir.join("output.xml");
        std::fs::copy(&source, &output_xml)
            .unwrap_or_else(|err| panic!("copy {}: {err}", source.display()));
        let artifacts_json = temp.path().join("reports/artifacts/run.json");
        Self {
            temp,
            output_xml,
            output_dir,
            artifacts_json,
        }
    }

    /// Canonical output directory, as the tool reports it in image paths.
    pub fn canonical_output_dir(&self) -> PathBuf {
        self.output_dir
            .canonicalize()
            .expect("canonicalize output dir")
    }

    /// Write a file under the run directory and return its path.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.output_dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directory");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    /// Run the converter with the required flags plus `extra`.
    pub fn run(&self, extra: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_robot-artifacts");
        Command::new(bin)
            .arg("--output-xml")
            .arg(&self.output_xml)
            .arg("--output-dir")
            .arg(&self.output_dir)
            .arg("--artifacts-json")
            .arg(&self.artifacts_json)
            .args(extra)
            .output()
            .expect("run robot-artifacts")
    }

    /// Run and require success, returning the parsed artifact.
    pub fn run_ok(&self, extra: &[&str]) -> Value {
        let output = self.run(extra);
        assert!(
            output.status.success(),
            "robot-artifacts failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        read_json(&self.artifacts_json)
    }
}

pub fn read_json(path: &Path) -> Value {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
    serde_json::from_str(&content).expect("parse artifact JSON")
}
