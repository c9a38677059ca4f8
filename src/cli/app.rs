//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::prompt::LinePrompt;
use super::session::Session;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "farmtech")]
#[command(author, version, about = "Interactive field records: plot areas, input quantities and CSV export")]
pub struct Cli {
    /// Output format for listings and status messages
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// CSV export destination (overrides the config file)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Config file to use instead of ./farmtech.toml or the global one
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("FarmTech starting");

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.output {
        config.export.path = path;
    }
    output.verbose_ctx(
        "config",
        &format!("Export to {}", config.export.path.display()),
    );

    let mut session = Session::new(LinePrompt::stdio(), config.export.exporter(), output)
        .with_decimals(config.display.decimals);

    session.run().context("Session aborted")?;
    Ok(())
}
