//! `reinhard` — recolor one image with the color statistics of another.
//!
//! Pipeline: decode source and target to 8-bit RGB -> statistical transfer in
//! lαβ space -> encode the result. All color math lives in `reinhard-core`.

mod args;
mod config;
mod error;
mod image_loader;

use std::process::ExitCode;

use clap::Parser;
use reinhard_core::TransferEngine;
use tracing_subscriber::EnvFilter;

use args::Cli;
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let env_quantization = std::env::var(config::QUANTIZATION_ENV).ok();
    let config = config::resolve(cli.config.as_deref(), env_quantization.as_deref(), cli.round)?;
    let engine = TransferEngine::new(config);

    let source = image_loader::load_image(&cli.source)?;
    let target = image_loader::load_image(&cli.target)?;

    let (result, report) = engine.transfer_with_report(&source, &target)?;
    if report.clamped_values > 0 {
        tracing::info!("{} channel values saturated to [0, 255]", report.clamped_values);
    }
    image_loader::save_image(&cli.output, result)?;

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
