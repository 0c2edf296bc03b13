use hotel_core::NewIdentity;

use chrono::NaiveDate;
use uuid::Uuid;

/// Registration fields with a pre-hashed password
pub fn new_identity(email: &str) -> NewIdentity {
    NewIdentity {
        email: email.to_string(),
        credential_hash: "$2b$04$abcdefghijklmnopqrstuu5Yy0iJc6qJ8nXk0d6b1yW3n8CwQ8b7u".to_string(),
        display_name: format!("Hóspede {}", &Uuid::new_v4().simple().to_string()[..8]),
        pronoun: Some("ela".to_string()),
        phone: Some("(11) 91234-5678".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
        national_id: None,
    }
}

pub fn new_identity_with_cpf(email: &str, cpf: &str) -> NewIdentity {
    NewIdentity {
        national_id: Some(cpf.to_string()),
        ..new_identity(email)
    }
}

/// Unique email so tests sharing a database do not collide
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@hotel.test", prefix, Uuid::new_v4().simple())
}
