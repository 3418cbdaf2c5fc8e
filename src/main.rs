//! folded-dipole-dxf: folded-dipole antenna dimensions as a DXF drawing
//!
//! Computes the dimensions of a folded dipole for a given frequency and writes
//! a DXF drawing of its mounting former to standard output.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, error, info, Level};
use tracing_subscriber::EnvFilter;

use folded_dipole_dxf::config::{self, Config};
use folded_dipole_dxf::dipole::{self, FoldedDipole};
use folded_dipole_dxf::error;

/// Folded-dipole antenna calculator with DXF output.
///
/// Writes a DXF drawing of the antenna former to standard output.
#[derive(Parser, Debug)]
#[command(name = "folded-dipole-dxf")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Frequency in MHz
    #[arg(value_name = "FREQUENCY_MHZ")]
    frequency: Option<f64>,

    /// Mount offset in mm [default: 3]
    #[arg(value_name = "MOUNT_OFFSET_MM")]
    mount_offset: Option<f64>,

    /// Wire radius in mm [default: rod diameter / 2]
    #[arg(value_name = "WIRE_RADIUS_MM")]
    wire_radius: Option<f64>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Reject parameters that produce degenerate geometry
    #[arg(long)]
    strict: bool,

    /// Print the computed dimensions as JSON instead of the drawing
    #[arg(long)]
    dimensions: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries only the document.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Writes `output` to stdout in a single write.
fn write_stdout(output: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}

/// Computes the dipole and writes the drawing (or the dimensions) to stdout.
fn run(args: &Args, frequency: f64, cfg: &Config) -> error::Result<()> {
    let mount_offset = args.mount_offset.unwrap_or(cfg.drawing.mount_offset);
    let dipole = FoldedDipole::new(frequency, mount_offset, args.wire_radius);

    if args.strict || cfg.drawing.strict {
        dipole::validate(&dipole)?;
    } else {
        dipole::warn_degenerate(&dipole);
    }

    let dims = &dipole.dimensions;
    info!(
        frequency = dims.frequency,
        wavelength = dims.wavelength,
        total_length = dims.total_length,
        bend_radius = dims.bend_radius,
        wire_radius = dims.wire_radius,
        mount_offset,
        "Computed folded dipole"
    );

    let output = if args.dimensions {
        serde_json::to_string_pretty(dims)? + "\n"
    } else {
        dipole.render().serialize()
    };

    debug!(bytes = output.len(), "Writing output");
    write_stdout(&output)?;

    Ok(())
}

/// Entry point for folded-dipole-dxf.
fn main() -> ExitCode {
    let args = Args::parse();

    let Some(frequency) = args.frequency else {
        println!("{}", Args::command().render_help());
        return ExitCode::FAILURE;
    };

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    match run(&args, frequency, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}
