use crate::AuthMetrics;
use crate::error::Result as ServerErrorResult;

use hotel_auth::{ClientRateLimiter, CredentialHasher, RateLimitConfig, TokenService};
use hotel_config::Config;
use hotel_db::IdentityStore;

use std::sync::Arc;

/// Shared, read-only state handed to every handler and extractor
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn IdentityStore>,
    pub tokens: Arc<TokenService>,
    pub hasher: CredentialHasher,
    /// Applies to every route
    pub general_limiter: Arc<ClientRateLimiter>,
    /// Applies to `/api/auth/*`
    pub auth_limiter: Arc<ClientRateLimiter>,
    pub metrics: AuthMetrics,
    /// Attach `detalhes` to 500 responses
    pub expose_error_details: bool,
}

impl AppState {
    /// Build the state from validated configuration and an identity store
    pub fn from_config(config: &Config, store: Arc<dyn IdentityStore>) -> ServerErrorResult<Self> {
        let tokens = TokenService::new(config.auth.jwt_secret().as_bytes(), config.auth.jwt_ttl()?);

        Ok(Self {
            store,
            tokens: Arc::new(tokens),
            hasher: CredentialHasher::new(config.auth.bcrypt_cost),
            general_limiter: Arc::new(ClientRateLimiter::new(limiter_config(&config.rate_limit))),
            auth_limiter: Arc::new(ClientRateLimiter::new(limiter_config(
                &config.auth_rate_limit,
            ))),
            metrics: AuthMetrics::new(),
            expose_error_details: config.server.expose_error_details,
        })
    }
}

fn limiter_config(config: &hotel_config::RateLimitConfig) -> RateLimitConfig {
    RateLimitConfig {
        max_requests: config.max_requests,
        window_secs: config.window_secs,
    }
}
