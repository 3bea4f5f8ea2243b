//! Local report artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use readiness_core::constants::{ARTIFACT_STEM, ARTIFACT_TIMESTAMP_FORMAT};
use readiness_core::errors::PublishError;
use readiness_core::models::Report;

use crate::markdown::render_markdown;

/// Paths of the JSON and Markdown artifacts for one run. Both share a stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

impl ArtifactPaths {
    /// `<output_dir>/lb_readiness_report_<YYYYMMDDTHHMMSSZ>.{json,md}`
    pub fn for_report(output_dir: &Path, generated_at: DateTime<Utc>) -> Self {
        let stem = format!(
            "{ARTIFACT_STEM}_{}",
            generated_at.format(ARTIFACT_TIMESTAMP_FORMAT)
        );
        Self {
            json: output_dir.join(format!("{stem}.json")),
            markdown: output_dir.join(format!("{stem}.md")),
        }
    }
}

/// Write both artifacts, creating the output directory when missing.
pub fn write_artifacts(report: &Report, paths: &ArtifactPaths) -> Result<(), PublishError> {
    write_json(report, &paths.json)?;

    let json_name = paths
        .json
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    write_file(&paths.markdown, render_markdown(report, &json_name).as_bytes())?;

    tracing::info!(path = %paths.json.display(), "JSON report written");
    tracing::info!(path = %paths.markdown.display(), "Markdown report written");
    Ok(())
}

pub fn write_json(report: &Report, path: &Path) -> Result<(), PublishError> {
    let body = serde_json::to_string_pretty(report)?;
    write_file(path, body.as_bytes())
}

fn write_file(path: &Path, body: &[u8]) -> Result<(), PublishError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, body)
    };
    write().map_err(|source| PublishError::WriteFailed {
        path: path.display().to_string(),
        source,
    })
}
