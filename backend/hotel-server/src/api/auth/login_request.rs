use crate::api::validation::{validate_email, validate_senha_presente};

use serde::Deserialize;
use validator::Validate;

/// Request body for POST /api/auth/login
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_senha_presente"))]
    pub senha: String,
}
