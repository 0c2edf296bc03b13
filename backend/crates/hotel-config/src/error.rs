use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Table of `config.toml` (or process environment) a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Server,
    Database,
    Auth,
    RateLimit,
    Logging,
    Environment,
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Server => "server",
            Self::Database => "database",
            Self::Auth => "auth",
            Self::RateLimit => "rate_limit",
            Self::Logging => "logging",
            Self::Environment => "environment",
        };
        f.write_str(name)
    }
}

impl ConfigSection {
    /// Validation failure in this section
    #[track_caller]
    pub fn invalid(self, message: impl Into<String>) -> ConfigError {
        ConfigError::Invalid {
            section: self,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid [{section}] configuration: {message} {location}")]
    Invalid {
        section: ConfigSection,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed TOML in {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
