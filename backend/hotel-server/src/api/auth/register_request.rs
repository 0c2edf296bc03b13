use crate::api::validation::{
    validate_cpf, validate_data_nascimento, validate_email, validate_nome, validate_senha,
    validate_telefone,
};

use serde::Deserialize;
use validator::Validate;

/// Request body for POST /api/auth/register
///
/// Missing required fields deserialize to empty strings so they are
/// reported as field errors rather than as a malformed body.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_nome"))]
    pub nome: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_senha"))]
    pub senha: String,
    pub pronome: Option<String>,
    #[validate(custom(function = "validate_telefone"))]
    pub telefone: Option<String>,
    #[validate(custom(function = "validate_data_nascimento"))]
    pub data_nascimento: Option<String>,
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<String>,
}
