mod cli;
mod config;
mod error;

use crate::{cli::Args, config::AppConfig, error::Result};
use clap::Parser;
use colored::*;
use playlist_resolver::Pipeline;
use std::process;
use tracing::{Level, debug, error};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Critical Error: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet)?;

    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_args(&args);
    config.validate()?;

    if args.show_config {
        println!("{}", config.show()?);
        return Ok(());
    }

    debug!("Effective configuration: {:?}", config);

    let pipeline = Pipeline::new(config.into_pipeline_config())?;
    let summary = pipeline.run().await?;

    if !args.quiet {
        println!(
            "\n{} Saved {} of {} channels to {}",
            "Success!".green().bold(),
            summary.resolved,
            summary.total,
            summary.output_path.display()
        );
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_level(verbose))
        .with(filter)
        .try_init()?;

    Ok(())
}
