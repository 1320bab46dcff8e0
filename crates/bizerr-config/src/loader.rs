use std::path::Path;

use bizerr_core::Catalog;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        tracing::debug!(errors = config.catalog.errors.len(), "configuration loaded");

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the logging filter is blank or the catalog is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.logging.filter.trim().is_empty() {
            anyhow::bail!("logging.filter must not be empty");
        }

        self.build_catalog()?;

        Ok(())
    }

    /// Build the error catalog declared in this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog section is invalid
    pub fn build_catalog(&self) -> anyhow::Result<Catalog> {
        self.catalog
            .build()
            .map_err(|e| anyhow::anyhow!("invalid error catalog: {e}"))
    }
}
