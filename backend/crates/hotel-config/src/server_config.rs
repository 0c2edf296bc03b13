use crate::{
    ConfigErrorResult, ConfigSection, DEFAULT_BODY_LIMIT_BYTES, DEFAULT_CORS_ORIGIN, DEFAULT_HOST,
    DEFAULT_PORT, MAX_BODY_LIMIT_BYTES, MIN_BODY_LIMIT_BYTES, MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Single origin allowed by CORS (credentials enabled)
    pub cors_origin: String,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
    /// Attach error details to 500 responses (development only)
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            cors_origin: String::from(DEFAULT_CORS_ORIGIN),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            expose_error_details: false,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick one
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigSection::Server.invalid(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        let origin = self.cors_origin.trim();
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigSection::Server.invalid(format!(
                "server.cors_origin must be an http(s) origin, got '{}'",
                self.cors_origin
            )));
        }

        if self.body_limit_bytes < MIN_BODY_LIMIT_BYTES
            || self.body_limit_bytes > MAX_BODY_LIMIT_BYTES
        {
            return Err(ConfigSection::Server.invalid(format!(
                "server.body_limit_bytes must be {}-{}, got {}",
                MIN_BODY_LIMIT_BYTES, MAX_BODY_LIMIT_BYTES, self.body_limit_bytes
            )));
        }

        Ok(())
    }
}
