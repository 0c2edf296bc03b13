use crate::{RegisterRequest, ValidJson};

use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::{Request, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn accept(ValidJson(request): ValidJson<RegisterRequest>) -> String {
    request.nome
}

fn router() -> Router {
    Router::new()
        .route("/register", post(accept))
        .layer(DefaultBodyLimit::max(1024))
}

fn json_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_valid_body_when_extracting_then_handler_runs() {
    let body = r#"{"nome":"Ana","email":"ana@x.com","senha":"123456"}"#;

    let response = router().oneshot(json_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_malformed_json_when_extracting_then_returns_dados_invalidos() {
    // When
    let response = router().oneshot(json_request("{nome:")).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["sucesso"], false);
    assert_eq!(json["mensagem"], "Dados inválidos");
}

#[tokio::test]
async fn given_invalid_fields_when_extracting_then_returns_field_errors() {
    let body = r#"{"nome":"Ana","email":"not-an-email","senha":"123"}"#;

    let response = router().oneshot(json_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["mensagem"], "Dados inválidos");
    assert_eq!(json["erros"][0]["campo"], "email");
    assert_eq!(json["erros"][1]["campo"], "senha");
}

#[tokio::test]
async fn given_body_over_limit_when_extracting_then_returns_413() {
    let body = format!(r#"{{"nome":"{}"}}"#, "a".repeat(4096));

    let response = router().oneshot(json_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
