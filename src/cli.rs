//! Command line of the `type-tour` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::TourConfig;
use crate::error::Result;

/// Walk the type tour and print its console lines
#[derive(Debug, Parser)]
#[command(name = "type-tour", version, about)]
pub struct TourArgs {
    /// JSON configuration file.
    /// Built-in defaults are used when omitted.
    pub config: Option<PathBuf>,
}

impl TourArgs {
    /// The configuration named on the command line, or the defaults
    pub fn load_config(&self) -> Result<TourConfig> {
        match &self.config {
            Some(path) => TourConfig::from_path(path),
            None => Ok(TourConfig::default()),
        }
    }
}
