//! Lifecycle of one request's authentication.
//!
//! ```text
//! Unauthenticated -> TokenPresent -> TokenValid -> IdentityLoaded -> Authorized
//! ```
//!
//! Every transition either yields the next stage or fails with an
//! [`AuthError`](crate::AuthError); a failure is terminal for the request.
//! The driver lives with whoever owns the identity store.

use crate::Claims;

#[derive(Debug, Clone)]
pub enum AuthStage<I> {
    /// Raw `Authorization` header, if any
    Unauthenticated { authorization: Option<String> },
    /// Bearer token extracted, not yet verified
    TokenPresent { token: String },
    /// Signature and expiry checked
    TokenValid { claims: Claims },
    /// Active identity resolved from the token subject
    IdentityLoaded { identity: I },
    /// Access requirement satisfied
    Authorized { identity: I },
}

impl<I> AuthStage<I> {
    pub fn start(authorization: Option<&str>) -> Self {
        Self::Unauthenticated {
            authorization: authorization.map(str::to_string),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "unauthenticated",
            Self::TokenPresent { .. } => "token_present",
            Self::TokenValid { .. } => "token_valid",
            Self::IdentityLoaded { .. } => "identity_loaded",
            Self::Authorized { .. } => "authorized",
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }

    /// The authorized identity, if the pipeline completed
    pub fn into_authorized(self) -> Option<I> {
        match self {
            Self::Authorized { identity } => Some(identity),
            _ => None,
        }
    }
}
