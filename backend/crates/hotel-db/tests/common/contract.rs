//! Behaviour every identity store must share.
//!
//! Each check uses its own unique emails so the Postgres suite can run them
//! against a shared database.

use super::fixtures::{new_identity, new_identity_with_cpf, unique_email};

use hotel_core::IdentityChanges;
use hotel_db::{DbError, IdentityStore};

use googletest::prelude::*;
use uuid::Uuid;

fn is_email_conflict(err: &DbError) -> bool {
    matches!(err, DbError::Conflict { constraint: Some(c), .. } if c.contains("email"))
}

pub async fn created_identity_is_found_by_email_and_id(store: &dyn IdentityStore) {
    // Given: A registered identity
    let email = unique_email("found");
    let created = store.create(new_identity(&email)).await.unwrap();

    // When: Looking it up both ways
    let by_email = store.find_by_email(&email).await.unwrap();
    let by_id = store.find_by_id(created.id).await.unwrap();

    // Then: Both return the same live record
    assert_that!(by_email.as_ref().map(|i| i.id), some(eq(created.id)));
    assert_that!(by_id.as_ref().map(|i| i.id), some(eq(created.id)));
    assert_that!(created.active, eq(true));
    assert_that!(created.deleted_at, none());
}

pub async fn email_lookup_ignores_case_and_whitespace(store: &dyn IdentityStore) {
    let email = unique_email("case");
    let created = store.create(new_identity(&email)).await.unwrap();

    let found = store
        .find_by_email(&format!("  {} ", email.to_uppercase()))
        .await
        .unwrap();

    assert_that!(found.map(|i| i.id), some(eq(created.id)));
}

pub async fn soft_deleted_identity_is_hidden_from_lookups(store: &dyn IdentityStore) {
    // Given: An identity deleted by an administrator
    let email = unique_email("hidden");
    let created = store.create(new_identity(&email)).await.unwrap();
    store.soft_delete(created.id, Uuid::new_v4()).await.unwrap();

    // Then: No lookup returns it and it cannot be updated
    assert_that!(store.find_by_email(&email).await.unwrap(), none());
    assert_that!(store.find_by_id(created.id).await.unwrap(), none());

    let result = store
        .update(
            created.id,
            IdentityChanges {
                display_name: Some("Outro".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

pub async fn soft_delete_twice_succeeds(store: &dyn IdentityStore) {
    let created = store
        .create(new_identity(&unique_email("twice")))
        .await
        .unwrap();

    store.soft_delete(created.id, Uuid::new_v4()).await.unwrap();
    let second = store.soft_delete(created.id, created.id).await;

    assert_that!(second.is_ok(), eq(true));
}

pub async fn soft_delete_of_unknown_id_is_not_found(store: &dyn IdentityStore) {
    let result = store.soft_delete(Uuid::new_v4(), Uuid::new_v4()).await;

    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

pub async fn duplicate_live_email_conflicts(store: &dyn IdentityStore) {
    let email = unique_email("dup");
    store.create(new_identity(&email)).await.unwrap();

    let err = store
        .create(new_identity(&email.to_uppercase()))
        .await
        .unwrap_err();

    assert_that!(is_email_conflict(&err), eq(true));
}

pub async fn email_is_reusable_after_soft_delete(store: &dyn IdentityStore) {
    // Given: A deleted identity
    let email = unique_email("reuse");
    let first = store.create(new_identity(&email)).await.unwrap();
    store.soft_delete(first.id, first.id).await.unwrap();

    // When: Registering the same email again
    let second = store.create(new_identity(&email)).await.unwrap();

    // Then: A new identity owns the email
    assert_that!(second.id, not(eq(first.id)));
    let found = store.find_by_email(&email).await.unwrap();
    assert_that!(found.map(|i| i.id), some(eq(second.id)));
}

pub async fn duplicate_live_cpf_conflicts(store: &dyn IdentityStore) {
    let cpf = format!("{:011}", Uuid::new_v4().as_u128() % 100_000_000_000);
    store
        .create(new_identity_with_cpf(&unique_email("cpf-a"), &cpf))
        .await
        .unwrap();

    let result = store
        .create(new_identity_with_cpf(&unique_email("cpf-b"), &cpf))
        .await;

    match result {
        Err(err @ DbError::Conflict { .. }) => assert_that!(is_email_conflict(&err), eq(false)),
        other => panic!("expected a conflict, got {:?}", other.map(|i| i.id)),
    }
}

pub async fn concurrent_registrations_with_same_email_have_one_winner(store: &dyn IdentityStore) {
    // Given: Two registrations racing for the same email
    let email = unique_email("race");

    // When: Both run concurrently
    let (a, b) = tokio::join!(
        store.create(new_identity(&email)),
        store.create(new_identity(&email))
    );

    // Then: Exactly one succeeds and the other reports a conflict
    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_that!(successes, eq(1));

    let loser = if a.is_err() { a } else { b };
    assert!(matches!(loser, Err(DbError::Conflict { .. })));
}

pub async fn update_changes_only_supplied_fields(store: &dyn IdentityStore) {
    // Given: A registered identity
    let created = store
        .create(new_identity(&unique_email("update")))
        .await
        .unwrap();

    // When: Changing only the phone
    let updated = store
        .update(
            created.id,
            IdentityChanges {
                phone: Some(Some("(21) 3333-4444".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Then: Everything else is untouched
    assert_that!(updated.id, eq(created.id));
    assert_that!(updated.phone.as_deref(), some(eq("(21) 3333-4444")));
    assert_that!(updated.display_name, eq(&created.display_name));
    assert_that!(updated.email, eq(&created.email));
    assert_that!(updated.credential_hash, eq(&created.credential_hash));
    assert_that!(updated.active, eq(true));
}

pub async fn update_with_null_fields_clears_them(store: &dyn IdentityStore) {
    // Given: An identity with phone, pronoun and birth date on file
    let created = store
        .create(new_identity(&unique_email("clear")))
        .await
        .unwrap();

    // When: Clearing the phone and birth date
    let updated = store
        .update(
            created.id,
            IdentityChanges {
                phone: Some(None),
                birth_date: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Then: Only those fields are cleared
    assert_that!(updated.phone, none());
    assert_that!(updated.birth_date, none());
    assert_that!(updated.pronoun, eq(&created.pronoun));
    let found = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_that!(found.phone, none());
}

pub async fn update_to_taken_email_conflicts(store: &dyn IdentityStore) {
    let taken = unique_email("taken");
    store.create(new_identity(&taken)).await.unwrap();
    let other = store
        .create(new_identity(&unique_email("other")))
        .await
        .unwrap();

    let err = store
        .update(
            other.id,
            IdentityChanges {
                email: Some(taken),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_that!(is_email_conflict(&err), eq(true));
}

pub async fn update_of_unknown_id_is_not_found(store: &dyn IdentityStore) {
    let result = store
        .update(Uuid::new_v4(), IdentityChanges::default())
        .await;

    assert!(matches!(result, Err(DbError::NotFound { .. })));
}
