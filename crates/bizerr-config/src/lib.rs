#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod env;
mod loader;
pub mod logging;

use serde::Deserialize;

pub use catalog::*;
pub use logging::*;

/// Top-level configuration file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Error descriptors and the fallback code
    pub catalog: CatalogConfig,
}
