//! Service configuration.
//!
//! Settings come from an optional TOML file (path in `NATAL_CONFIG`) and are
//! then overridden by environment variables:
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `EPHEMERIS_PATH`: Ephemeris data search path (default: `.`)
//! - `HOUSE_SYSTEM`: House system used for the ascendant (default: placidus)
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//!
//! [ephemeris]
//! data_path = "/usr/local/share/ephe"
//! house_system = "placidus"
//! ```

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::{EphemerisSettings, HouseSystem};

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "NATAL_CONFIG";

/// Configuration errors, reported at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ephemeris: EphemerisFileSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Ephemeris settings as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisFileSettings {
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default = "default_house_system")]
    pub house_system: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_path() -> String {
    ".".to_string()
}

fn default_house_system() -> String {
    "placidus".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for EphemerisFileSettings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            house_system: default_house_system(),
        }
    }
}

impl ServiceConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the file named by `NATAL_CONFIG` (if set), then apply environment
    /// overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override settings from `HOST`, `PORT`, `EPHEMERIS_PATH` and `HOUSE_SYSTEM`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Ok(path) = env::var("EPHEMERIS_PATH") {
            self.ephemeris.data_path = path;
        }
        if let Ok(system) = env::var("HOUSE_SYSTEM") {
            self.ephemeris.house_system = system;
        }
        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                key: "server.host".to_string(),
                message: format!("{}", e),
            })
    }

    /// Validated ephemeris session settings.
    pub fn ephemeris_settings(&self) -> Result<EphemerisSettings, ConfigError> {
        let house_system: HouseSystem =
            self.ephemeris
                .house_system
                .parse()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "ephemeris.house_system".to_string(),
                    message: format!("{}", e),
                })?;

        if self.ephemeris.data_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "ephemeris.data_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(EphemerisSettings {
            data_path: PathBuf::from(&self.ephemeris.data_path),
            house_system,
        })
    }
}
