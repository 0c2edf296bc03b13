use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization: Bearer <token>` header value
#[track_caller]
pub fn bearer_token(authorization: Option<&str>) -> AuthErrorResult<&str> {
    let header = authorization.ok_or_else(|| AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    })?;

    match header.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Self-only check: the targeted resource must belong to the requester.
///
/// `resource_id` is compared as text so a malformed id is simply "not yours".
#[track_caller]
pub fn ensure_owner(identity_id: Uuid, resource_id: &str) -> AuthErrorResult<()> {
    if identity_id.to_string() == resource_id.trim().to_lowercase() {
        return Ok(());
    }

    Err(AuthError::Forbidden {
        identity_id: identity_id.to_string(),
        resource_id: resource_id.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
