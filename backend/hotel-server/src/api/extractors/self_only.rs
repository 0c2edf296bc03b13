use crate::api::extractors::authenticated_user::authorization_header;
use crate::auth::auth_pipeline::AuthPipeline;
use crate::{ApiError, AppState};

use hotel_core::Identity;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The identity behind a valid bearer token, which must also be the
/// `{id}` path segment of the route (pipeline steps 1-4)
pub struct SelfOnly(pub Identity);

impl FromRequestParts<AppState> for SelfOnly {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let authorization = authorization_header(parts);
            let Path(target) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::internal(format!("self-only route without id: {}", e)))?;

            let identity = AuthPipeline::from_state(state)
                .authorize_owner(authorization.as_deref(), &target)
                .await?;

            Ok(SelfOnly(identity))
        }
    }
}
