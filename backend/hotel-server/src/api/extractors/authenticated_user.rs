//! Axum extractors for REST API authentication

use crate::auth::auth_pipeline::AuthPipeline;
use crate::{ApiError, AppState};

use hotel_core::Identity;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The identity behind a valid bearer token (pipeline steps 1-3)
pub struct AuthenticatedUser(pub Identity);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let authorization = authorization_header(parts);
            let identity = AuthPipeline::from_state(state)
                .authenticate(authorization.as_deref())
                .await?;

            log::debug!("Authenticated identity {}", identity.id);
            Ok(AuthenticatedUser(identity))
        }
    }
}

/// Raw `Authorization` header. A value that is not visible ASCII counts as absent.
pub(crate) fn authorization_header(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
