//! Configuration management and validation.
//!
//! Provides the resolved runtime configuration for a conversion run,
//! assembled from CLI arguments by the command layer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::{Error, Result};

/// Resolved configuration for one conversion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Report file to read; stdin when absent
    pub input: Option<PathBuf>,

    /// Destination for converted records; stdout when absent
    pub output: Option<PathBuf>,

    /// Reference instant override; the wall clock is captured once at the
    /// call site when absent
    pub reference_time: Option<DateTime<Utc>>,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Config {
    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }

            if input.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory: {}",
                    input.display()
                )));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
