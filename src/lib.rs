//! Clicktrack - TDOA click track association.
//!
//! This crate associates detected acoustic click events into temporally
//! coherent tracks from their time-difference-of-arrival measurements.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod tracker;

use clap::{CommandFactory, Parser};
use cli::{Cli, Command, TrackArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use output::{RunMetadata, progress};
use std::path::Path;
use tracing::{debug, info};
use tracker::TrackingParams;

pub use error::{Error, Result};

/// Main entry point for the clicktrack CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.track.verbose, cli.track.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let (Some(click_file), Some(output_file)) = (cli.click_file, cli.output_file) else {
        // No subcommand and no input/output pair: show usage.
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_default_config()?;
    track_file(&click_file, &output_file, &cli.track, &config)
}

/// Run one association pass over a click file.
fn track_file(
    click_file: &Path,
    output_file: &Path,
    args: &TrackArgs,
    config: &Config,
) -> Result<()> {
    use std::time::Instant;

    let start = Instant::now();
    let params = resolve_params(args, config)?;
    debug!(?params, "resolved tracking parameters");

    info!("Loading clicks: {}", click_file.display());
    let table = input::load_click_table(click_file)?;
    let clicks = table.clicks(click_file)?;
    info!("Loaded {} click(s)", clicks.len());

    let progress_enabled = !args.quiet && !args.no_progress;
    let spinner = progress::create_tracking_spinner(clicks.len(), progress_enabled);
    let result = tracker::associate_tracks(&clicks, &params)?;
    progress::finish_progress(spinner, "Association complete");

    info!(
        "Found {} track(s), {} of {} clicks assigned",
        result.tracks.len(),
        result.assigned_clicks(),
        clicks.len()
    );

    output::write_click_table(output_file, &table, &result.assignment)?;
    info!("Wrote {}", output_file.display());

    let duration = start.elapsed().as_secs_f64();
    if config.output.metadata && !args.no_metadata {
        let metadata = RunMetadata::new(click_file, output_file, &params, &result, duration);
        output::write_metadata(output_file, &metadata)?;
        info!("Wrote {}", output::metadata_path(output_file).display());
    }

    info!("Complete in {duration:.2}s");
    Ok(())
}

/// Merge CLI flags over config defaults and validate the result.
fn resolve_params(args: &TrackArgs, config: &Config) -> Result<TrackingParams> {
    let params = TrackingParams {
        amp_thres: args.amp_thres.unwrap_or(config.defaults.amp_thres),
        click_interval_max: args
            .click_interval_max
            .unwrap_or(config.defaults.click_interval_max),
        diff_max: args.diff_max.unwrap_or(config.defaults.diff_max),
        polynomial_expectation: args.polynomial || config.defaults.polynomial_expectation,
    };
    params.validate()?;
    Ok(params)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
