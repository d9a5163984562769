//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "onetoday-widget")]
#[command(about = "A home-screen style goal widget showing time remaining until midnight")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Path to the preference file the main app shares with the widget
    #[arg(short, long, default_value = "onetoday_prefs.json")]
    pub store: PathBuf,

    /// Refresh schedule horizon in minutes
    #[arg(long, default_value = "60")]
    pub horizon: u32,

    /// Seconds between refresh evaluations in watch mode
    #[arg(short, long, default_value = "60")]
    pub interval: u64,

    /// Evaluate the widget once, print it, and exit
    #[arg(long)]
    pub once: bool,

    /// Print the precomputed refresh schedule and exit
    #[arg(long)]
    pub timeline: bool,

    /// Emit machine-readable JSON instead of the text card (with --once)
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
