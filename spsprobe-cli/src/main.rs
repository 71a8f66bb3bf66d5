mod cli;
mod config;
mod error;
mod output;

use std::{
    io::{self, Read, Write},
    path::Path,
    process,
};

use clap::Parser;
use h264::ParseSession;
use tracing::{Level, error, info};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::{
    cli::Args,
    config::AppConfig,
    error::{AppError, Result},
    output::OutputManager,
};

fn main() {
    if let Err(e) = run() {
        error!("Application error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet)?;

    let config = AppConfig::load(args.config.as_deref())?.merge_args(&args);
    info!("Session options: {:?}", config.session);

    let input = read_input(&args.input)?;
    info!("Read {} bytes from {}", input.len(), args.input.display());

    let report = ParseSession::new(input, config.session.clone()).run();

    let rendered = OutputManager::new(config.all_units).format_report(&report, config.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

/// Reads the whole input up front; the parser never streams.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        return Ok(buffer);
    }

    if path.is_dir() {
        return Err(AppError::InvalidInput(format!(
            "{} is a directory",
            path.display()
        )));
    }

    Ok(std::fs::read(path)?)
}

fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    // logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(verbose)
                .with_writer(io::stderr),
        )
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    Ok(())
}
