use crate::{Identity, normalize_email};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// Fields required to create an identity. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: String,
    pub credential_hash: String,
    pub display_name: String,
    pub pronoun: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub national_id: Option<String>,
}

impl NewIdentity {
    /// Materialize the record a store will persist: fresh id, creation
    /// timestamp, active, normalized email.
    pub fn into_identity(self) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: normalize_email(&self.email),
            credential_hash: self.credential_hash,
            display_name: self.display_name,
            pronoun: self.pronoun,
            phone: self.phone,
            birth_date: self.birth_date,
            national_id: self.national_id,
            active: true,
            created_at: Utc::now(),
            deleted_at: None,
            deleted_by: None,
        }
    }
}
