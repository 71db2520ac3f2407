//! Configuration model for the meme CLI.
//!
//! Configuration is optional and only read from a YAML file named with
//! `--config`. Unknown fields are ignored for forward compatibility and every
//! field has a default, so an empty file is a valid config.


use crate::error::{MemeError, Result};
use crate::meme::catalog::DEFAULT_TEMPLATE;
use crate::meme::{DEFAULT_BASE_URL, DEFAULT_EXTENSION, MemeGenerator};
use serde::Deserialize;
use std::path::Path;

/// Settings that adjust URL generation and suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the memegen deployment (default: the public API).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Image format used when `--extension` is not given.
    #[serde(default = "default_extension")]
    pub default_extension: String,

    /// Template suggested when no context keyword matches.
    #[serde(default = "default_fallback_template")]
    pub fallback_template: String,
}

// Default value functions for serde
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}
fn default_fallback_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_extension: default_extension(),
            fallback_template: default_fallback_template(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MemeError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MemeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config named on the command line, or defaults when there is none.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml treats an empty document as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MemeError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `base_url` must be an http(s) URL
    /// - `default_extension` must be non-empty and have no leading dot
    /// - `fallback_template` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(MemeError::UserError(format!(
                "config validation failed: base_url must start with http:// or https:// (found '{}')",
                self.base_url
            )));
        }

        if self.default_extension.is_empty() {
            return Err(MemeError::UserError(
                "config validation failed: default_extension must be non-empty".to_string(),
            ));
        }
        if self.default_extension.starts_with('.') {
            return Err(MemeError::UserError(format!(
                "config validation failed: default_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.default_extension,
                self.default_extension.trim_start_matches('.')
            )));
        }

        if self.fallback_template.is_empty() {
            return Err(MemeError::UserError(
                "config validation failed: fallback_template must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Generator pointed at the configured deployment.
    pub fn generator(&self) -> MemeGenerator {
        MemeGenerator::new(self.base_url.as_str())
    }
}
