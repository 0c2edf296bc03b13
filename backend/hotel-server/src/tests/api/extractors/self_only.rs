use crate::tests::{bearer, create_identity, test_state};
use crate::{AppState, SelfOnly};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use tower::ServiceExt;

async fn owner_only(SelfOnly(identity): SelfOnly) -> String {
    identity.id.to_string()
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/users/{id}", get(owner_only))
        .with_state(state)
}

fn request(path: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("Authorization", authorization)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn given_own_id_when_extracting_then_passes() {
    // Given
    let (state, store) = test_state();
    let identity = create_identity(&store, "ana@x.com").await;
    let authorization = bearer(&state, &identity);

    // When
    let response = router(state)
        .oneshot(request(&format!("/users/{}", identity.id), &authorization))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_other_identity_id_when_extracting_then_forbidden() {
    // Given
    let (state, store) = test_state();
    let ana = create_identity(&store, "ana@x.com").await;
    let bia = create_identity(&store, "bia@x.com").await;
    let authorization = bearer(&state, &ana);

    // When
    let response = router(state)
        .oneshot(request(&format!("/users/{}", bia.id), &authorization))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn given_malformed_id_when_extracting_then_forbidden_not_bad_request() {
    let (state, store) = test_state();
    let ana = create_identity(&store, "ana@x.com").await;
    let authorization = bearer(&state, &ana);

    let response = router(state)
        .oneshot(request("/users/not-a-uuid", &authorization))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn given_invalid_token_when_extracting_then_unauthorized_before_ownership() {
    let (state, store) = test_state();
    let ana = create_identity(&store, "ana@x.com").await;

    let response = router(state)
        .oneshot(request(&format!("/users/{}", ana.id), "Bearer garbage"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
