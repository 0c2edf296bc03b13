//! REST API error types
//!
//! Every error renders as the failure envelope with the matching status.
//! Internal detail is logged, never sent, except through the opt-in
//! [`ErrorDetail`] response extension.

use crate::{Envelope, FieldError};

use hotel_auth::AuthError;
use hotel_core::CoreError;
use hotel_db::DbError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";
pub const INVALID_BODY_MESSAGE: &str = "Dados inválidos";
pub const INVALID_PARAMS_MESSAGE: &str = "Parâmetros inválidos";
pub const USER_NOT_FOUND_MESSAGE: &str = "Usuário não encontrado";
pub const DUPLICATE_IDENTITY_MESSAGE: &str = "Email ou CPF já está em uso";

/// Detail of a 500 response, attached as a response extension.
/// A layer copies it into the body as `detalhes` when enabled.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed field validation (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Authentication failed (401)
    #[error("Unauthorized: {source} {location}")]
    Unauthorized {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    /// Authenticated, but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Body over the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Rate limit exceeded (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is logged, not sent.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => log::error!("{}", self),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                log::warn!("{}", self)
            }
            _ => log::debug!("{}", self),
        }

        let (body, detail) = match self {
            ApiError::Validation {
                message, errors, ..
            } => (Envelope::failure(message, errors), None),
            ApiError::Unauthorized { source, .. } => {
                (Envelope::failure(source.client_message(), Vec::new()), None)
            }
            ApiError::Internal { message, .. } => (
                Envelope::failure(INTERNAL_ERROR_MESSAGE, Vec::new()),
                Some(ErrorDetail(message)),
            ),
            ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::PayloadTooLarge { message, .. }
            | ApiError::RateLimited { message, .. } => {
                (Envelope::failure(message, Vec::new()), None)
            }
        };

        let mut response = (status, body).into_response();
        if let Some(detail) = detail {
            response.extensions_mut().insert(detail);
        }

        response
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            e if e.is_unauthenticated() => ApiError::Unauthorized {
                source: e,
                location,
            },
            AuthError::Forbidden { .. } => ApiError::Forbidden {
                message: e.client_message(),
                location,
            },
            AuthError::RateLimitExceeded { .. } => ApiError::RateLimited {
                message: e.client_message(),
                location,
            },
            AuthError::InvalidInput { ref message, .. } => ApiError::Validation {
                message: INVALID_BODY_MESSAGE.to_string(),
                errors: vec![FieldError::new("senha", message.clone())],
                location,
            },
            _ => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::Conflict { ref constraint, .. } => {
                log::info!("Store rejected duplicate value (constraint {:?})", constraint);
                ApiError::Conflict {
                    message: DUPLICATE_IDENTITY_MESSAGE.to_string(),
                    location,
                }
            }
            DbError::NotFound { .. } => ApiError::NotFound {
                message: USER_NOT_FOUND_MESSAGE.to_string(),
                location,
            },
            DbError::Sqlx { .. } | DbError::Migration { .. } | DbError::Initialization { .. } => {
                // Don't expose internal database details to clients
                ApiError::Internal {
                    message: e.to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert core validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message: INVALID_PARAMS_MESSAGE.to_string(),
                errors: vec![FieldError::new(
                    field.unwrap_or_else(|| "parametros".to_string()),
                    message,
                )],
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
