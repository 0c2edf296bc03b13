//! Drives [`AuthStage`] from a raw `Authorization` header to an authorized
//! identity, one transition at a time.
//!
//! Nothing is cached: every request re-verifies the token and re-loads the
//! identity, which is the only thing stopping tokens of deleted accounts.

use crate::{ApiError, ApiResult, AppState, AuthMetrics};

use hotel_auth::{AccessRequirement, AuthError, AuthStage, TokenService, bearer_token, ensure_owner};
use hotel_core::Identity;
use hotel_db::IdentityStore;

use std::panic::Location;

use error_location::ErrorLocation;

pub struct AuthPipeline<'a> {
    store: &'a dyn IdentityStore,
    tokens: &'a TokenService,
    metrics: &'a AuthMetrics,
}

impl<'a> AuthPipeline<'a> {
    pub fn new(
        store: &'a dyn IdentityStore,
        tokens: &'a TokenService,
        metrics: &'a AuthMetrics,
    ) -> Self {
        Self {
            store,
            tokens,
            metrics,
        }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(state.store.as_ref(), state.tokens.as_ref(), &state.metrics)
    }

    /// Perform a single transition.
    ///
    /// `IdentityLoaded` only moves to `Authorized` once `requirement` holds;
    /// `Authorized` is terminal and returned unchanged.
    pub async fn advance(
        &self,
        stage: AuthStage<Identity>,
        requirement: &AccessRequirement,
    ) -> ApiResult<AuthStage<Identity>> {
        let next = match stage {
            AuthStage::Unauthenticated { authorization } => AuthStage::TokenPresent {
                token: bearer_token(authorization.as_deref())?.to_string(),
            },
            AuthStage::TokenPresent { token } => AuthStage::TokenValid {
                claims: self.tokens.verify(&token)?,
            },
            AuthStage::TokenValid { claims } => {
                let id = claims.subject_id()?;
                let identity = self.store.find_by_id(id).await?.ok_or_else(|| {
                    AuthError::IdentityNotFound {
                        subject: claims.sub.clone(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                AuthStage::IdentityLoaded { identity }
            }
            AuthStage::IdentityLoaded { identity } => {
                if let AccessRequirement::Owner(resource_id) = requirement {
                    ensure_owner(identity.id, resource_id)?;
                }
                AuthStage::Authorized { identity }
            }
            authorized @ AuthStage::Authorized { .. } => authorized,
        };

        Ok(next)
    }

    /// Run every transition until the identity is authorized for `requirement`
    pub async fn run(
        &self,
        authorization: Option<&str>,
        requirement: AccessRequirement,
    ) -> ApiResult<Identity> {
        let mut stage = AuthStage::start(authorization);

        while !stage.is_authorized() {
            let from = stage.name();
            stage = self.advance(stage, &requirement).await.inspect_err(|e| {
                self.reject(from, e);
            })?;
        }

        stage.into_authorized().ok_or_else(|| ApiError::internal("auth pipeline ended unauthorized"))
    }

    /// Steps 1-3: any active identity holding a valid token
    pub async fn authenticate(&self, authorization: Option<&str>) -> ApiResult<Identity> {
        self.run(authorization, AccessRequirement::Authenticated).await
    }

    /// Steps 1-4: the identity must be the owner of `resource_id`
    pub async fn authorize_owner(
        &self,
        authorization: Option<&str>,
        resource_id: &str,
    ) -> ApiResult<Identity> {
        self.run(
            authorization,
            AccessRequirement::Owner(resource_id.to_string()),
        )
        .await
    }

    fn reject(&self, stage: &str, error: &ApiError) {
        let reason = match error {
            ApiError::Unauthorized { source, .. } => source.error_code(),
            ApiError::Forbidden { .. } => "FORBIDDEN",
            _ => "INTERNAL",
        };

        log::warn!("Request rejected at stage {}: {}", stage, reason);
        self.metrics.rejection(reason);
    }
}
