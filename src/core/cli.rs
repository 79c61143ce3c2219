//! Command line arguments for the application

use bevy::prelude::*;
use clap::Parser;

use crate::core::errors::{ensure, Result};
use crate::core::settings::DEFAULT_TOOL_ID;

/// command line arguments for picking the startup tool and log verbosity
#[derive(Parser, Debug, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// id of the tool to activate at startup
    #[arg(long = "tool", default_value = DEFAULT_TOOL_ID)]
    pub initial_tool: String,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Reject argument combinations that would only fail later and
    /// deeper inside startup.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.initial_tool.trim().is_empty(),
            "--tool requires a non-empty tool id"
        );
        Ok(())
    }
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            initial_tool: DEFAULT_TOOL_ID.to_string(),
            debug: false,
        }
    }
}
