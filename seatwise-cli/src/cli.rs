//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::app_config::{Config, OutputFormat};

/// Seat airplane passengers: aisle seats first, then window, then middle
#[derive(Debug, Parser)]
#[command(name = "seatwise", version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file, merged over config/default, the RUN_MODE file and config/local
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Passenger count, overriding the configured one
    #[arg(short, long, allow_negative_numbers = true)]
    pub passengers: Option<i64>,

    /// Output format, overriding the configured one
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(passengers) = self.passengers {
            config.seating.passengers = passengers;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.pretty {
            config.output.pretty = true;
        }
    }
}
