//! User REST API handlers
//!
//! Listing and reading are open to any authenticated identity; updating and
//! deleting by id are self-only through [`SelfOnly`].

use crate::api::error::USER_NOT_FOUND_MESSAGE;
use crate::api::validation::page_request;
use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, Envelope, ListUsersQuery, SelfOnly,
    UpdateUserRequest, UserDto, UserListResponse, UserResponse, ValidJson, ValidQuery,
};

use hotel_core::Identity;

use axum::extract::{Path, State};
use uuid::Uuid;

pub const EMAIL_IN_USE_MESSAGE: &str = "Email já está em uso por outro usuário";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/usuarios?pagina&limite
///
/// List live users, newest first
pub async fn list_users(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    ValidQuery(query): ValidQuery<ListUsersQuery>,
) -> ApiResult<Envelope<UserListResponse>> {
    let page = page_request(query.pagina.as_deref(), query.limite.as_deref())?;
    let result = state.store.list(page).await?;

    Ok(Envelope::with_data(
        "Usuários listados com sucesso",
        UserListResponse {
            usuarios: result.items.into_iter().map(UserDto::from).collect(),
            total: result.total,
            pagina: page.page(),
            limite: page.page_size(),
            total_paginas: page.total_pages(result.total),
        },
    ))
}

/// GET /api/usuarios/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Envelope<UserResponse>> {
    // A malformed id cannot name a user
    let identity = match Uuid::parse_str(&id) {
        Ok(user_id) => state.store.find_by_id(user_id).await?,
        Err(_) => None,
    }
    .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND_MESSAGE))?;

    Ok(Envelope::with_data(
        "Usuário encontrado",
        UserResponse {
            usuario: identity.into(),
        },
    ))
}

/// PUT /api/usuarios/{id}
pub async fn update_user(
    State(state): State<AppState>,
    SelfOnly(identity): SelfOnly,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> ApiResult<Envelope<UserResponse>> {
    let updated = apply_update(&state, &identity, req).await?;

    Ok(Envelope::with_data(
        "Usuário atualizado com sucesso",
        UserResponse {
            usuario: updated.into(),
        },
    ))
}

/// DELETE /api/usuarios/{id}
///
/// Soft delete. Tokens already issued stop working on their next use
/// because the pipeline no longer finds the identity.
pub async fn delete_user(
    State(state): State<AppState>,
    SelfOnly(identity): SelfOnly,
) -> ApiResult<Envelope<()>> {
    state.store.soft_delete(identity.id, identity.id).await?;

    log::info!("Identity {} deleted itself", identity.id);

    Ok(Envelope::message("Usuário deletado com sucesso"))
}

/// GET /api/usuarios/profile/me
pub async fn get_profile(
    AuthenticatedUser(identity): AuthenticatedUser,
) -> ApiResult<Envelope<UserResponse>> {
    Ok(Envelope::with_data(
        "Perfil do usuário",
        UserResponse {
            usuario: identity.into(),
        },
    ))
}

/// PUT /api/usuarios/profile/me
pub async fn update_profile(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> ApiResult<Envelope<UserResponse>> {
    let updated = apply_update(&state, &identity, req).await?;

    Ok(Envelope::with_data(
        "Perfil atualizado com sucesso",
        UserResponse {
            usuario: updated.into(),
        },
    ))
}

// =============================================================================
// Helpers
// =============================================================================

async fn apply_update(
    state: &AppState,
    identity: &Identity,
    req: UpdateUserRequest,
) -> ApiResult<Identity> {
    if let Some(email) = req.normalized_email() {
        let holder = state.store.find_by_email(&email).await?;
        if holder.is_some_and(|other| other.id != identity.id) {
            return Err(ApiError::conflict(EMAIL_IN_USE_MESSAGE));
        }
    }

    let credential_hash = match req.senha.clone() {
        Some(senha) => Some(state.hasher.hash_async(senha).await?),
        None => None,
    };

    let changes = req.into_changes(credential_hash);
    if changes.is_empty() {
        return Ok(identity.clone());
    }

    let updated = state.store.update(identity.id, changes).await?;
    log::info!("Updated identity {}", updated.id);

    Ok(updated)
}
