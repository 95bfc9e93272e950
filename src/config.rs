//! Configuration loading
//!
//! `defaults/mdtok.default.toml` is compiled in and always forms the bottom layer. The CLI adds
//! `./mdtok.toml` if present, then a `--config` file, then its own flags.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdtok.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MdtokConfig {
    pub output: OutputConfig,
    pub balancing: BalancingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a format registered in [FormatRegistry](crate::markdown::formats::FormatRegistry)
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalancingConfig {
    pub enabled: bool,
}

/// Picked up from the working directory when present
pub const LOCAL_CONFIG_FILE: &str = "mdtok.toml";

/// Builds an [MdtokConfig] from the embedded defaults and whatever is layered on top.
/// Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn with_defaults() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that has to exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists, [LOCAL_CONFIG_FILE] in practice
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), false)
    }

    /// Select the output format by its registry name
    pub fn with_format(self, name: &str) -> Result<Self, ConfigError> {
        self.set("output.format", name)
    }

    pub fn with_balancing(self, enabled: bool) -> Result<Self, ConfigError> {
        self.set("balancing.enabled", enabled)
    }

    pub fn build(self) -> Result<MdtokConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn set(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }
}
