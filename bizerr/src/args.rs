use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Business error catalog tool
#[derive(Debug, Parser)]
#[command(name = "bizerr", about = "Inspect and exercise a business error catalog")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "bizerr.toml", env = "BIZERR_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the catalog and print a summary
    Check,
    /// Print every descriptor
    List,
    /// Print a single descriptor
    Explain {
        /// Error code to look up
        code: String,
    },
    /// Wrap a simulated failure in the given codes and print the boundary response
    ///
    /// The first code is the outermost layer.
    Resolve {
        /// Error codes, outermost first
        codes: Vec<String>,
    },
}
