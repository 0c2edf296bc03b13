use hotel_core::Identity;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Public representation of an identity. There is no password field, so a
/// hash can never be serialized.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub nome: String,
    pub pronome: Option<String>,
    pub email: String,
    pub telefone: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<Uuid>,
}

impl From<Identity> for UserDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            nome: identity.display_name,
            pronome: identity.pronoun,
            email: identity.email,
            telefone: identity.phone,
            data_nascimento: identity.birth_date,
            cpf: identity.national_id,
            timestamp: identity.created_at,
            active: identity.active,
            deleted_at: identity.deleted_at,
            deleted_by: identity.deleted_by,
        }
    }
}
