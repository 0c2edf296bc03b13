use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ConfigSection,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, RateLimitConfig, ServerConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    /// Applies to every route
    pub rate_limit: RateLimitConfig,
    /// Applies to `/api/auth/*` on top of `rate_limit`
    pub auth_rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            rate_limit: RateLimitConfig::default(),
            auth_rate_limit: RateLimitConfig::auth_default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. HOTEL_CONFIG_DIR env var, else ./.hotel/
    /// 2. config.toml in that directory if it exists, else defaults
    /// 3. HOTEL_* environment variable overrides
    ///
    /// The directory is not created. Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Priority: HOTEL_CONFIG_DIR env var > ./.hotel/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|_| {
            ConfigSection::Environment.invalid("Cannot determine current working directory")
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate("rate_limit")?;
        self.auth_rate_limit.validate("auth_rate_limit")?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigSection::Logging.invalid(
                "logging.file must be relative to logging.dir and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (cors origin {}, body limit {} bytes)",
            self.server.host,
            self.server.port,
            self.server.cors_origin,
            self.server.body_limit_bytes
        );
        if self.server.expose_error_details {
            info!("  server: error details exposed in 500 responses");
        }

        if self.database.is_memory() {
            info!("  database: in-memory store");
        } else {
            info!(
                "  database: {} (max {} connections)",
                self.database.redacted_url(),
                self.database.max_connections
            );
        }

        info!(
            "  auth: HS256 (secret {}), ttl={}, bcrypt cost={}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.jwt_ttl,
            self.auth.bcrypt_cost
        );

        info!(
            "  rate_limit: {}/{}s, auth_rate_limit: {}/{}s",
            self.rate_limit.max_requests,
            self.rate_limit.window_secs,
            self.auth_rate_limit.max_requests,
            self.auth_rate_limit.window_secs
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging
                .file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdout".to_string())
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HOTEL_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HOTEL_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("HOTEL_SERVER_CORS_ORIGIN", &mut self.server.cors_origin);
        Self::apply_env_parse(
            "HOTEL_SERVER_BODY_LIMIT_BYTES",
            &mut self.server.body_limit_bytes,
        );
        Self::apply_env_bool(
            "HOTEL_SERVER_EXPOSE_ERROR_DETAILS",
            &mut self.server.expose_error_details,
        );

        // Database
        Self::apply_env_string("HOTEL_DATABASE_URL", &mut self.database.url);
        Self::apply_env_parse(
            "HOTEL_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("HOTEL_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("HOTEL_AUTH_JWT_TTL", &mut self.auth.jwt_ttl);
        Self::apply_env_parse("HOTEL_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);

        // Rate limits
        Self::apply_env_parse(
            "HOTEL_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "HOTEL_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );
        Self::apply_env_parse(
            "HOTEL_AUTH_RATE_LIMIT_MAX_REQUESTS",
            &mut self.auth_rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "HOTEL_AUTH_RATE_LIMIT_WINDOW_SECS",
            &mut self.auth_rate_limit.window_secs,
        );

        // Logging
        Self::apply_env_parse("HOTEL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HOTEL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HOTEL_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("HOTEL_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
