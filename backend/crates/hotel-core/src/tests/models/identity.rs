use crate::NewIdentity;

use chrono::Utc;
use uuid::Uuid;

fn new_identity() -> NewIdentity {
    NewIdentity {
        email: " Ana@X.com".to_string(),
        credential_hash: "$2b$04$secret-hash-value".to_string(),
        display_name: "Ana".to_string(),
        pronoun: None,
        phone: None,
        birth_date: None,
        national_id: None,
    }
}

#[test]
fn test_into_identity_assigns_id_and_normalizes_email() {
    let identity = new_identity().into_identity();

    assert_eq!(identity.email, "ana@x.com");
    assert!(identity.active);
    assert!(identity.deleted_at.is_none());
    assert!(identity.deleted_by.is_none());
    assert!(!identity.id.is_nil());
}

#[test]
fn test_into_identity_never_reuses_ids() {
    let a = new_identity().into_identity();
    let b = new_identity().into_identity();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_is_live_false_after_soft_delete() {
    let mut identity = new_identity().into_identity();
    assert!(identity.is_live());

    identity.active = false;
    identity.deleted_at = Some(Utc::now());
    identity.deleted_by = Some(Uuid::new_v4());

    assert!(identity.is_deleted());
    assert!(!identity.is_live());
}

#[test]
fn test_debug_output_redacts_credential_hash() {
    let identity = new_identity().into_identity();
    let debug = format!("{:?}", identity);

    assert!(!debug.contains("secret-hash-value"));
    assert!(debug.contains("<redacted>"));
}
