mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "HOTEL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hotel";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;
const MIN_BODY_LIMIT_BYTES: usize = 1024;
const MAX_BODY_LIMIT_BYTES: usize = 100 * 1024 * 1024;

// Database
/// Sentinel url selecting the in-process store
pub const MEMORY_DATABASE_URL: &str = "memory";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

// Auth
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_JWT_TTL: &str = "24h";
const MAX_JWT_TTL: std::time::Duration = std::time::Duration::from_secs(365 * 24 * 60 * 60);
const DEFAULT_BCRYPT_COST: u32 = 12;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
