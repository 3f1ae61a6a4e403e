use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::info;
use type_tour::{TourArgs, tour};

fn main() -> anyhow::Result<()> {
    let args = TourArgs::parse();
    let config = args.load_config().with_context(|| match &args.config {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load the default config".to_string(),
    })?;

    // Setup logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();
    if let Some(path) = &args.config {
        info!("Loaded configuration from {}", path.display());
    }
    info!("Using {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tour::run(&config, &mut out).context("Failed to run the tour")?;
    out.flush()?;
    Ok(())
}
