use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing or malformed authorization header {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Identity {subject} not found or inactive {location}")]
    IdentityNotFound {
        subject: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Identity {identity_id} may not access resource {resource_id} {location}")]
    Forbidden {
        identity_id: String,
        resource_id: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    Hashing {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token lifetime out of range: {message} {location}")]
    TokenLifetime {
        message: String,
        location: ErrorLocation,
    },

    #[error("Blocking task failed: {message} {location}")]
    BlockingTask {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code, also used as the metrics label for rejections
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::MissingToken { .. } => "MISSING_TOKEN",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "EXPIRED_TOKEN",
            Self::IdentityNotFound { .. } => "IDENTITY_NOT_FOUND",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
            Self::Hashing { .. } => "HASHING_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::TokenLifetime { .. } => "TOKEN_LIFETIME_OUT_OF_RANGE",
            Self::BlockingTask { .. } => "BLOCKING_TASK_FAILED",
        }
    }

    /// Message shown to API clients. Never includes internal detail.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. } => message.clone(),
            Self::MissingToken { .. } => "Token de acesso não fornecido".to_string(),
            Self::InvalidToken { .. } => "Token inválido".to_string(),
            Self::TokenExpired { .. } => "Token expirado".to_string(),
            Self::IdentityNotFound { .. } => "Usuário não encontrado".to_string(),
            Self::InvalidCredentials { .. } => "Credenciais inválidas".to_string(),
            Self::Forbidden { .. } => {
                "Acesso negado: você só pode acessar seus próprios dados".to_string()
            }
            Self::RateLimitExceeded { window_secs, .. } => format!(
                "Muitas tentativas. Tente novamente em {} minutos.",
                window_minutes(*window_secs)
            ),
            Self::Hashing { .. }
            | Self::JwtEncode { .. }
            | Self::TokenLifetime { .. }
            | Self::BlockingTask { .. } => "Erro interno do servidor".to_string(),
        }
    }

    /// True for the failures of the request-authentication pipeline (401)
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::MissingToken { .. }
                | Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::IdentityNotFound { .. }
                | Self::InvalidCredentials { .. }
        )
    }
}

/// Window length rounded up to whole minutes, never zero
pub fn window_minutes(window_secs: u64) -> u64 {
    window_secs.div_ceil(60).max(1)
}

pub type Result<T> = std::result::Result<T, AuthError>;
