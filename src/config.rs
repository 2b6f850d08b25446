//! Service configuration
//!
//! Configuration is a small JSON file; every field is optional and the
//! file itself may be absent, in which case the built-in defaults
//! apply. CLI flags override whatever the file says.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON for [`ServiceConfig`]
    #[error("invalid config JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field value fails validation
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Permit CSV file to serve (default: "Mobile_Food_Facility_Permit.csv")
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_csv_file() -> String {
    "Mobile_Food_Facility_Permit.csv".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            csv_file: default_csv_file(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from a JSON file.
    ///
    /// The file must exist and parse; use [`ServiceConfig::load_or_default`]
    /// when an absent file should fall back to defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, treating a missing file as all-defaults.
    ///
    /// Any other failure (unreadable file, malformed JSON, bad values)
    /// is still an error.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validates field values.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.csv_file.is_empty() {
            return Err(ConfigError::Invalid("csv_file must not be empty".into()));
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".into()));
        }

        Ok(())
    }

    /// CSV file as a path
    pub fn csv_path(&self) -> &Path {
        Path::new(&self.csv_file)
    }

    /// Socket address string to bind
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
