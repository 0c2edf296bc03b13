//! Identity entity - a registered user account.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A registered user account as persisted by the identity store.
///
/// `Identity` deliberately has no `Serialize` impl: the outward
/// representation is built explicitly by the HTTP layer and never carries
/// `credential_hash`. The `Debug` impl redacts the hash for the same reason.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    /// Normalized (trimmed, lower-case) login email
    pub email: String,
    /// bcrypt hash of the password
    pub credential_hash: String,
    pub display_name: String,
    pub pronoun: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// CPF (Brazilian national id), digits only
    pub national_id: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<Uuid>,
}

impl Identity {
    /// Check if the account was soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Active and not deleted - the only records lookups may return
    pub fn is_live(&self) -> bool {
        self.active && !self.is_deleted()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("credential_hash", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("pronoun", &self.pronoun)
            .field("phone", &self.phone)
            .field("birth_date", &self.birth_date)
            .field("national_id", &self.national_id)
            .field("active", &self.active)
            .field("created_at", &self.created_at)
            .field("deleted_at", &self.deleted_at)
            .field("deleted_by", &self.deleted_by)
            .finish()
    }
}
