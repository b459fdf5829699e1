//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// TDOA click track association.
#[derive(Debug, Parser)]
#[command(name = "clicktrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Click feature table (.csv or .parquet) with `time`, `amplitude`
    /// and `tdoa` columns.
    pub click_file: Option<PathBuf>,

    /// Output table: the input columns plus a `track_id` column (-1 for
    /// unassigned clicks).
    pub output_file: Option<PathBuf>,

    /// Tracking options.
    #[command(flatten)]
    pub track: TrackArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for a tracking run.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct TrackArgs {
    /// Click amplitude threshold; quieter clicks are ignored entirely.
    #[arg(long, value_parser = parse_non_negative, env = "CLICKTRACK_AMP_THRES")]
    pub amp_thres: Option<f64>,

    /// Maximum interval in seconds between clicks before a track stops
    /// accepting new members.
    #[arg(long, value_parser = parse_positive, env = "CLICKTRACK_CLICK_INTERVAL_MAX")]
    pub click_interval_max: Option<f64>,

    /// Maximum difference in seconds between the expected and observed
    /// TDOA for a click to join a track.
    #[arg(long, value_parser = parse_positive, env = "CLICKTRACK_DIFF_MAX")]
    pub diff_max: Option<f64>,

    /// Predict the next TDOA by local polynomial extrapolation instead of
    /// the last raw value.
    #[arg(long)]
    pub polynomial: bool,

    /// Skip writing the run-metadata sidecar.
    #[arg(long)]
    pub no_metadata: bool,

    /// Suppress the progress spinner.
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress all non-warning output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a threshold that must be finite and strictly positive.
fn parse_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("value must be finite and > 0, got {value}"));
    }

    Ok(value)
}

/// Parse a threshold that must be finite and non-negative.
fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("value must be finite and >= 0, got {value}"));
    }

    Ok(value)
}
