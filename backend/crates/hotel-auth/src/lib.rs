pub mod access_requirement;
pub mod auth_stage;
pub mod bearer;
pub mod claims;
pub mod client_rate_limiter;
pub mod credential_hasher;
pub mod error;
pub mod issued_token;
pub mod rate_limit_config;
pub mod token_service;

pub use access_requirement::AccessRequirement;
pub use auth_stage::AuthStage;
pub use bearer::{bearer_token, ensure_owner};
pub use claims::Claims;
pub use client_rate_limiter::ClientRateLimiter;
pub use credential_hasher::CredentialHasher;
pub use error::{AuthError, Result};
pub use issued_token::IssuedToken;
pub use rate_limit_config::RateLimitConfig;
pub use token_service::TokenService;

#[cfg(test)]
mod tests;
