use crate::middleware::{error_details, rate_limit, request_logging};
use crate::{
    AppState, delete_user, get_profile, get_user, health, list_users, login, refresh_token,
    register, update_profile, update_user, verify_token,
};

use hotel_config::Config;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, config: &Config) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/verify-token", post(verify_token))
        .route("/refresh-token", post(refresh_token))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::auth_rate_limit,
        ));

    let user_routes = Router::new()
        .route("/", get(list_users))
        .route("/profile/me", get(get_profile).put(update_profile))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user));

    Router::new()
        // Health check and directory
        .route("/health", get(health::health_check))
        .route("/api", get(health::api_directory))
        // REST API
        .nest("/api/auth", auth_routes)
        .nest("/api/usuarios", user_routes)
        .fallback(health::not_found)
        .method_not_allowed_fallback(health::not_found)
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_details::expose_error_details,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::general_rate_limit,
        ))
        .layer(middleware::from_fn(request_logging::log_requests))
        // Add shared state
        .with_state(state)
        .layer(security_headers(header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(security_headers(header::X_FRAME_OPTIONS, "DENY"))
        .layer(security_headers(header::REFERRER_POLICY, "no-referrer"))
        // CORS restricted to the configured web client
        .layer(cors_layer(&config.server.cors_origin))
}

fn security_headers(
    name: HeaderName,
    value: &'static str,
) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::exact(value),
        Err(e) => {
            log::warn!("Invalid CORS origin {:?} ({}), cross-origin requests disabled", origin, e);
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
