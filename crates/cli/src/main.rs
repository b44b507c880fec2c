//! ccflags CLI - compiler flags for code analysis tools
//!
//! This binary resolves the compiler flags needed to parse C-family source and
//! header files, from a compilation database or a static flag table.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{bail, Context, Result};
use ccflags::{resolve_files, ConfigSummary, OutputFormat};
use ccflags_core::Config;
use ccflags_resolver::FlagResolver;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};

/// Exit status when at least one file had no flags
const EXIT_UNAVAILABLE: u8 = 2;

#[derive(Parser)]
#[command(name = "ccflags")]
#[command(about = "Resolve compiler flags for C-family source and header files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (default: ./ccflags.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flags for one or more files
    Resolve {
        /// Source or header files
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show the effective configuration
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve { files, format } => resolve(cli.config.as_deref(), &files, format),
        Commands::Config => show_config(cli.config.as_deref()),
    }
}

/// Initialize logging system
///
/// Logs go to stderr so stdout carries only results.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ccflags_core={level},ccflags_resolver={level},{}={level}",
            env!("CARGO_PKG_NAME")
        ))
        .with_writer(std::io::stderr)
        .init();
}

fn load_resolver(config_path: Option<&Path>) -> Result<(Config, FlagResolver)> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let resolver =
        FlagResolver::from_config(&config).context("Failed to set up flag resolver")?;
    debug!(
        anchor = %config.anchor_dir().display(),
        database = resolver.database().is_configured(),
        "Resolver ready"
    );
    Ok((config, resolver))
}

fn resolve(config_path: Option<&Path>, files: &[PathBuf], format: OutputFormat) -> Result<ExitCode> {
    if format == OutputFormat::Lines && files.len() > 1 {
        bail!("--format lines takes a single file, got {}", files.len());
    }

    let (_config, resolver) = load_resolver(config_path)?;
    let reports = resolve_files(&resolver, files);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut unavailable = 0usize;
    for report in &reports {
        if let Some(reason) = &report.reason {
            warn!("{}: {reason}", report.file.display());
            unavailable += 1;
        }
        report.write_to(&mut out, format)?;
    }
    out.flush().context("Failed to write output")?;

    if unavailable > 0 {
        Ok(ExitCode::from(EXIT_UNAVAILABLE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn show_config(config_path: Option<&Path>) -> Result<ExitCode> {
    let (config, resolver) = load_resolver(config_path)?;
    let summary = ConfigSummary::new(&config, &resolver);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(ExitCode::SUCCESS)
}
