//! Configuration management for swagger-rdf.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `swagger-rdf.toml` file
//! 3. User config `~/.config/swagger-rdf/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Name of the failure kind, for one-line diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReadError(_) => "ConfigRead",
            Self::ParseError(_) => "ConfigParse",
            Self::Invalid(_) => "InvalidConfig",
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace and identifier configuration.
    pub namespace: NamespaceConfig,

    /// Input/output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./swagger-rdf.toml` (project local)
    /// 2. `~/.config/swagger-rdf/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var(ENV_BASE_URI) {
            self.namespace.base_uri = base;
        }
        if let Ok(prefix) = std::env::var(ENV_PREFIX) {
            self.namespace.prefix = prefix;
        }
        if let Ok(output) = std::env::var(ENV_OUTPUT) {
            self.output.output_path = Some(PathBuf::from(output));
        }
    }

    /// Check values that would otherwise only fail mid-conversion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.namespace.validate()
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Namespace configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Base URI for synthesized resources. Must end with `/` or `#`.
    pub base_uri: String,

    /// Prefix bound to `base_uri` in serialized output.
    pub prefix: String,

    /// Additional prefix bindings for serialization only.
    pub extra_prefixes: BTreeMap<String, String>,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            prefix: DEFAULT_BASE_PREFIX.to_string(),
            extra_prefixes: BTreeMap::new(),
        }
    }
}

impl NamespaceConfig {
    /// Namespace configuration with a different base URI.
    pub fn with_base(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_uri.ends_with('/') || self.base_uri.ends_with('#')) {
            return Err(ConfigError::Invalid(format!(
                "base_uri must end with '/' or '#': {}",
                self.base_uri
            )));
        }
        oxrdf::NamedNode::new(self.base_uri.as_str())
            .map_err(|e| ConfigError::Invalid(format!("base_uri {}: {}", self.base_uri, e)))?;

        for (prefix, iri) in std::iter::once((&self.prefix, &self.base_uri))
            .chain(self.extra_prefixes.iter())
        {
            if prefix.is_empty() || prefix.contains(':') {
                return Err(ConfigError::Invalid(format!("invalid prefix name '{}'", prefix)));
            }
            if RESERVED_PREFIXES.contains(&prefix.as_str()) {
                return Err(ConfigError::Invalid(format!("prefix '{}' is reserved", prefix)));
            }
            oxrdf::NamedNode::new(iri.as_str())
                .map_err(|e| ConfigError::Invalid(format!("prefix {} <{}>: {}", prefix, iri, e)))?;
        }
        Ok(())
    }
}

/// Input/output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File read when none is given on the command line.
    pub input_file: String,

    /// Write the graph here instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    /// Printed after the serialized graph.
    pub completion_notice: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            input_file: DEFAULT_INPUT_FILE.to_string(),
            output_path: None,
            completion_notice: DEFAULT_COMPLETION_NOTICE.to_string(),
        }
    }
}
