//! Per-client-IP rate limiting middleware.
//!
//! Two limiters share the same mechanics: the general one wraps every route,
//! the stricter auth one only wraps `/api/auth/*`.

use crate::middleware::client_ip;
use crate::{ApiError, AppState};

use hotel_auth::error::window_minutes;

use std::panic::Location;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

pub async fn general_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client = client_ip(&request);

    if let Err(e) = state.general_limiter.check(client) {
        log::warn!("Rate limit exceeded for {}", client);
        state.metrics.rate_limited("general");
        return Err(ApiError::from(e));
    }

    Ok(next.run(request).await)
}

pub async fn auth_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client = client_ip(&request);

    if state.auth_limiter.check(client).is_err() {
        log::warn!("Auth rate limit exceeded for {}", client);
        state.metrics.rate_limited("auth");
        return Err(ApiError::RateLimited {
            message: format!(
                "Muitas tentativas de login. Tente novamente em {} minutos.",
                window_minutes(state.auth_limiter.config().window_secs)
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(next.run(request).await)
}
