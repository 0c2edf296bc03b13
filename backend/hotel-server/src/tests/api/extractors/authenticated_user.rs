use crate::tests::{bearer, create_identity, test_state};
use crate::{ApiError, AuthenticatedUser};

use hotel_db::IdentityStore;

use axum::{body::Body, extract::FromRequestParts, http::Request};

fn parts(authorization: Option<&str>) -> axum::http::request::Parts {
    let mut builder = Request::builder().uri("/api/usuarios/profile/me");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap().into_parts().0
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracting_then_returns_identity() {
    // Given
    let (state, store) = test_state();
    let identity = create_identity(&store, "ana@x.com").await;
    let mut parts = parts(Some(bearer(&state, &identity).as_str()));

    // When
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    // Then
    let AuthenticatedUser(resolved) = result.unwrap();
    assert_eq!(resolved.id, identity.id);
}

#[tokio::test]
async fn given_no_header_when_extracting_then_rejects_unauthorized() {
    let (state, _store) = test_state();
    let mut parts = parts(None);

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_token_of_deleted_identity_when_extracting_then_rejects_unauthorized() {
    // Given
    let (state, store) = test_state();
    let identity = create_identity(&store, "ana@x.com").await;
    let authorization = bearer(&state, &identity);
    store.soft_delete(identity.id, identity.id).await.unwrap();
    let mut parts = parts(Some(authorization.as_str()));

    // When
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
