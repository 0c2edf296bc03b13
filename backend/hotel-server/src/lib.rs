pub mod api;
pub mod app_state;
pub mod auth;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod middleware;
pub mod routes;


pub use api::{
    auth::{
        auth::{login, refresh_token, register, verify_token},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    envelope::Envelope,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        authenticated_user::AuthenticatedUser, self_only::SelfOnly, valid_json::ValidJson,
        valid_query::ValidQuery,
    },
    field_error::FieldError,
    users::{
        list_users_query::ListUsersQuery,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{delete_user, get_profile, get_user, list_users, update_profile, update_user},
    },
};
pub use app_state::AppState;
pub use auth::auth_pipeline::AuthPipeline;
pub use error::{Result as ServerErrorResult, ServerError};
pub use metrics::AuthMetrics;

pub use crate::routes::build_router;
