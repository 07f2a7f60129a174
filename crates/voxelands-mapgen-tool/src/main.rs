//! Renders preview images and a biome census for a Voxelands world seed.

mod error;
mod render;
mod survey;

use std::process::ExitCode;

use clap::Parser;
use voxelands_config::{CliArgs, Config};

use crate::error::ToolError;

fn run(config: &Config) -> Result<(), ToolError> {
    let census = survey::survey_region(config)?;
    census.log();
    render::render_previews(config)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    voxelands_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
