use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Per-client-IP rate limiter.
///
/// Allows a burst of `max_requests` and refills one request per window, so no
/// window ever admits more than `max_requests` from the same client. A client
/// that exhausts its quota gets its next request one window after the first.
pub struct ClientRateLimiter {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
    config: RateLimitConfig,
}

impl ClientRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(config.window_secs.max(1));
        let quota = Quota::with_period(window)
            .map(|quota| quota.allow_burst(burst))
            .unwrap_or_else(|| Quota::per_second(burst));

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Check if a request from `client` is allowed
    #[track_caller]
    pub fn check(&self, client: IpAddr) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&client)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for clients whose quota has fully replenished
    pub fn purge_idle_clients(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }
}
