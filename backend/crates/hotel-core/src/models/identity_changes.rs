use crate::{Identity, normalize_email};

use chrono::NaiveDate;

/// Partial update of an identity.
///
/// Only these fields are mutable; `id`, `created_at`, `active` and the
/// deletion stamps can never be changed through an update.
///
/// Optional profile fields are doubly wrapped: `None` leaves the field as it
/// is, `Some(None)` clears it and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct IdentityChanges {
    pub display_name: Option<String>,
    pub pronoun: Option<Option<String>>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub national_id: Option<Option<String>>,
    /// New password, already routed through the credential hasher
    pub credential_hash: Option<String>,
}

impl IdentityChanges {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.pronoun.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.birth_date.is_none()
            && self.national_id.is_none()
            && self.credential_hash.is_none()
    }

    /// National id being set, if any. Clearing it never conflicts.
    pub fn new_national_id(&self) -> Option<&str> {
        self.national_id.as_ref().and_then(Option::as_deref)
    }

    /// Apply the changes to an in-memory record
    pub fn apply_to(&self, identity: &mut Identity) {
        if let Some(ref display_name) = self.display_name {
            identity.display_name = display_name.clone();
        }
        if let Some(ref pronoun) = self.pronoun {
            identity.pronoun = pronoun.clone();
        }
        if let Some(ref email) = self.email {
            identity.email = normalize_email(email);
        }
        if let Some(ref phone) = self.phone {
            identity.phone = phone.clone();
        }
        if let Some(birth_date) = self.birth_date {
            identity.birth_date = birth_date;
        }
        if let Some(ref national_id) = self.national_id {
            identity.national_id = national_id.clone();
        }
        if let Some(ref credential_hash) = self.credential_hash {
            identity.credential_hash = credential_hash.clone();
        }
    }
}
