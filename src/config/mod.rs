//! Configuration for the type tour.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Configuration for a tour run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Age substituted when a record has none
    pub default_age: u32,
    /// Filter passed to the logger when `RUST_LOG` is not set
    pub log_filter: String,
    /// Whether the key lookup section prints its `key: value` lines
    pub print_keys: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            default_age: 18,
            log_filter: "info".to_string(),
            print_keys: true,
        }
    }
}

impl TourConfig {
    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
