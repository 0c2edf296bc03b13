
use hotel_core::{Identity, NewIdentity};

pub(crate) fn test_identity(email: &str) -> Identity {
    NewIdentity {
        email: email.to_string(),
        credential_hash: "unused".to_string(),
        display_name: "Ana".to_string(),
        pronoun: None,
        phone: None,
        birth_date: None,
        national_id: None,
    }
    .into_identity()
}
