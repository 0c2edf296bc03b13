use crate::{
    ConfigErrorResult, ConfigSection, DEFAULT_BCRYPT_COST, DEFAULT_JWT_TTL, MAX_BCRYPT_COST,
    MAX_JWT_TTL, MIN_BCRYPT_COST, MIN_JWT_SECRET_LENGTH,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required.
    pub jwt_secret: Option<String>,
    /// Token lifetime as a humantime string ("24h", "30m")
    pub jwt_ttl: String,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_ttl: String::from(DEFAULT_JWT_TTL),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret.as_deref() {
            None => {
                return Err(ConfigSection::Auth.invalid(
                    "auth.jwt_secret is required (set HOTEL_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigSection::Auth.invalid(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        let ttl = self.jwt_ttl()?;
        if ttl.is_zero() {
            return Err(ConfigSection::Auth.invalid(
                "auth.jwt_ttl must be greater than zero",
            ));
        }
        if ttl > MAX_JWT_TTL {
            return Err(ConfigSection::Auth.invalid(format!(
                "auth.jwt_ttl must be at most {}, got '{}'",
                humantime::format_duration(MAX_JWT_TTL),
                self.jwt_ttl
            )));
        }

        if self.bcrypt_cost < MIN_BCRYPT_COST || self.bcrypt_cost > MAX_BCRYPT_COST {
            return Err(ConfigSection::Auth.invalid(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }

    /// Parsed token lifetime
    pub fn jwt_ttl(&self) -> ConfigErrorResult<Duration> {
        humantime::parse_duration(self.jwt_ttl.trim()).map_err(|e| {
            ConfigSection::Auth.invalid(format!(
                "auth.jwt_ttl '{}' is invalid: {}",
                self.jwt_ttl, e
            ))
        })
    }

    /// Signing secret; empty until validated
    pub fn jwt_secret(&self) -> &str {
        self.jwt_secret.as_deref().unwrap_or_default()
    }
}
