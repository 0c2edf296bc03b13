//! Authentication REST API handlers
//!
//! Thin orchestration over the credential hasher, the token service and the
//! identity store. Registration and login are open; verify and refresh go
//! through the auth pipeline via [`AuthenticatedUser`].

use crate::api::validation::{normalize_cpf, parse_birth_date};
use crate::{
    ApiError, ApiResult, AppState, AuthResponse, AuthenticatedUser, Envelope, LoginRequest,
    RegisterRequest, TokenResponse, UserDto, UserResponse, ValidJson,
};

use hotel_auth::AuthError;
use hotel_core::{NewIdentity, normalize_email};

use std::panic::Location;

use axum::{extract::State, http::StatusCode};
use error_location::ErrorLocation;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email já está em uso";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/register
///
/// Create an identity and sign it in
pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Envelope<AuthResponse>)> {
    let email = normalize_email(&req.email);

    if state.store.find_by_email(&email).await?.is_some() {
        log::info!("Registration refused: email already in use");
        return Err(ApiError::conflict(EMAIL_TAKEN_MESSAGE));
    }

    let credential_hash = state.hasher.hash_async(req.senha).await?;

    // A concurrent registration can still win between the lookup and the
    // insert; the store's conflict maps to 409.
    let identity = state
        .store
        .create(NewIdentity {
            email,
            credential_hash,
            display_name: req.nome.trim().to_string(),
            pronoun: req.pronome,
            phone: req.telefone,
            birth_date: req.data_nascimento.as_deref().and_then(parse_birth_date),
            national_id: req.cpf.as_deref().map(normalize_cpf),
        })
        .await?;

    let issued = state.tokens.issue(&identity)?;
    state.metrics.registration();
    state.metrics.token_issued();

    log::info!("Registered identity {}", identity.id);

    Ok((
        StatusCode::CREATED,
        Envelope::with_data(
            "Usuário criado com sucesso",
            AuthResponse {
                usuario: UserDto::from(identity),
                token: issued.token,
            },
        ),
    ))
}

/// POST /api/auth/login
///
/// Exchange email and password for a token. Unknown email and wrong
/// password are indistinguishable to the client.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> ApiResult<Envelope<AuthResponse>> {
    let email = normalize_email(&req.email);
    let Some(identity) = state.store.find_by_email(&email).await? else {
        state.metrics.login("invalid_credentials");
        return Err(invalid_credentials());
    };

    let matches = state
        .hasher
        .verify_async(req.senha, identity.credential_hash.clone())
        .await?;
    if !matches {
        state.metrics.login("invalid_credentials");
        return Err(invalid_credentials());
    }

    let issued = state.tokens.issue(&identity)?;
    state.metrics.login("success");
    state.metrics.token_issued();

    log::info!("Identity {} logged in", identity.id);

    Ok(Envelope::with_data(
        "Login realizado com sucesso",
        AuthResponse {
            usuario: UserDto::from(identity),
            token: issued.token,
        },
    ))
}

/// POST /api/auth/verify-token
pub async fn verify_token(
    AuthenticatedUser(identity): AuthenticatedUser,
) -> ApiResult<Envelope<UserResponse>> {
    Ok(Envelope::with_data(
        "Token válido",
        UserResponse {
            usuario: identity.into(),
        },
    ))
}

/// POST /api/auth/refresh-token
///
/// Issue a fresh token. The presented token stays valid until it expires.
pub async fn refresh_token(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> ApiResult<Envelope<TokenResponse>> {
    let issued = state.tokens.issue(&identity)?;
    state.metrics.token_issued();

    log::debug!("Refreshed token for identity {}", identity.id);

    Ok(Envelope::with_data(
        "Token renovado com sucesso",
        TokenResponse {
            token: issued.token,
        },
    ))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::from(AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    })
}
