use crate::api::validation::{
    normalize_cpf, parse_birth_date, validate_cpf, validate_data_nascimento, validate_email,
    validate_nome, validate_senha, validate_telefone,
};

use hotel_core::{IdentityChanges, normalize_email};

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Request body for PUT /api/usuarios/{id} and PUT /api/usuarios/profile/me
///
/// Only whitelisted fields are read; anything else in the body (`id`,
/// `timestamp`, `active`, `deleted_at`, `deleted_by`, ...) is ignored.
/// Optional profile fields sent as `null` are cleared; absent ones are kept.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "validate_nome"))]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub pronome: Option<Option<String>>,
    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_senha"))]
    pub senha: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_telefone"))]
    pub telefone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_data_nascimento"))]
    pub data_nascimento: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<Option<String>>,
}

/// Marks a field as present, so `null` becomes `Some(None)` rather than `None`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateUserRequest {
    /// Normalized email, if one is being set
    pub fn normalized_email(&self) -> Option<String> {
        self.email.as_deref().map(normalize_email)
    }

    /// Changes for the store, with the new password already hashed by the caller
    pub fn into_changes(self, credential_hash: Option<String>) -> IdentityChanges {
        IdentityChanges {
            email: self.normalized_email(),
            display_name: self.nome.map(|nome| nome.trim().to_string()),
            pronoun: self.pronome,
            phone: self.telefone,
            birth_date: self
                .data_nascimento
                .map(|data| data.as_deref().and_then(parse_birth_date)),
            national_id: self.cpf.map(|cpf| cpf.as_deref().map(normalize_cpf)),
            credential_hash,
        }
    }
}
