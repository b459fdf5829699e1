//! Run-metadata sidecar output.
//!
//! Each run stamps a small JSON file next to the output table recording
//! what produced it: tool version, host, timestamp, wall-clock duration,
//! the full parameter set and a result summary. Downstream analysis can
//! tell apart outputs produced with different thresholds without re-running
//! anything.

use crate::constants::{APP_NAME, METADATA_SUFFIX};
use crate::error::{Error, Result};
use crate::tracker::{TrackingParams, TrackingResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Provenance record for one association run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Tool name.
    pub tool: String,
    /// Crate version that produced the output.
    pub version: String,
    /// Host the run executed on, when determinable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Run timestamp.
    pub timestamp: DateTime<Utc>,
    /// Wall-clock duration of the run in seconds.
    pub duration_seconds: f64,
    /// Parameters the run used.
    pub parameters: RunParameters,
    /// Result summary.
    pub summary: RunSummary,
}

/// Parameter echo for the metadata sidecar.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunParameters {
    /// Input click file.
    pub click_file: PathBuf,
    /// Output file.
    pub output_file: PathBuf,
    /// Amplitude threshold.
    pub amp_thres: f64,
    /// Maximum intra-track click interval.
    pub click_interval_max: f64,
    /// Maximum prediction difference.
    pub diff_max: f64,
    /// Whether polynomial prediction was used.
    pub polynomial_expectation: bool,
}

/// Result summary for the metadata sidecar.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total clicks in the input.
    pub clicks_total: usize,
    /// Clicks assigned to a multi-member track.
    pub clicks_assigned: usize,
    /// Number of multi-member tracks found.
    pub tracks_found: usize,
}

impl RunMetadata {
    /// Assemble the metadata record for a finished run.
    pub fn new(
        click_file: &Path,
        output_file: &Path,
        params: &TrackingParams,
        result: &TrackingResult,
        duration_seconds: f64,
    ) -> Self {
        Self {
            tool: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            hostname: hostname::get()
                .ok()
                .and_then(|h| h.into_string().ok()),
            timestamp: Utc::now(),
            duration_seconds,
            parameters: RunParameters {
                click_file: click_file.to_path_buf(),
                output_file: output_file.to_path_buf(),
                amp_thres: params.amp_thres,
                click_interval_max: params.click_interval_max,
                diff_max: params.diff_max,
                polynomial_expectation: params.polynomial_expectation,
            },
            summary: RunSummary {
                clicks_total: result.assignment.len(),
                clicks_assigned: result.assigned_clicks(),
                tracks_found: result.tracks.len(),
            },
        }
    }
}

/// Sidecar path for an output file: `<output>.meta.json`.
pub fn metadata_path(output_file: &Path) -> PathBuf {
    let mut name = output_file.as_os_str().to_os_string();
    name.push(METADATA_SUFFIX);
    PathBuf::from(name)
}

/// Write the metadata sidecar next to the output file.
pub fn write_metadata(output_file: &Path, metadata: &RunMetadata) -> Result<()> {
    use std::io::Write;

    let path = metadata_path(output_file);
    let file = std::fs::File::create(&path).map_err(|e| Error::OutputCreate {
        path: path.clone(),
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, metadata)
        .map_err(|e| Error::MetadataWrite { path, source: e })?;
    writer.flush()?;
    Ok(())
}
