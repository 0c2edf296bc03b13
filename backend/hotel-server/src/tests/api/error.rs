use crate::{ApiError, FieldError};
use crate::api::error::ErrorDetail;

use hotel_auth::AuthError;
use hotel_core::CoreError;
use hotel_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_not_found_when_rendered_then_returns_404_envelope() {
    // Given
    let error = ApiError::not_found("Usuário não encontrado");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["sucesso"], false);
    assert_eq!(json["mensagem"], "Usuário não encontrado");
    assert!(json.get("erros").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_returns_400_with_erros() {
    let error = ApiError::Validation {
        message: "Dados inválidos".into(),
        errors: vec![FieldError::new("senha", "Senha deve ter pelo menos 6 caracteres")],
        location: ErrorLocation::from(Location::caller()),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["mensagem"], "Dados inválidos");
    assert_eq!(json["erros"][0]["campo"], "senha");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_detail_stays_out_of_body() {
    // Given
    let error = ApiError::internal("connection refused on 10.0.0.5");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response.extensions().get::<ErrorDetail>().cloned();
    assert_eq!(detail.unwrap().0, "connection refused on 10.0.0.5");

    let json = body_json(response).await;
    assert_eq!(json["mensagem"], "Erro interno do servidor");
    assert!(!json.to_string().contains("10.0.0.5"));
}

#[tokio::test]
async fn given_expired_token_when_converted_then_returns_401_token_expirado() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["mensagem"], "Token expirado");
}

#[test]
fn given_auth_failures_when_converted_then_statuses_match() {
    let location = || ErrorLocation::from(Location::caller());

    let cases = [
        (AuthError::MissingToken { location: location() }, StatusCode::UNAUTHORIZED),
        (
            AuthError::InvalidCredentials {
                location: location(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            AuthError::IdentityNotFound {
                subject: "x".into(),
                location: location(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            AuthError::Forbidden {
                identity_id: "a".into(),
                resource_id: "b".into(),
                location: location(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            AuthError::RateLimitExceeded {
                limit: 5,
                window_secs: 900,
                location: location(),
            },
            StatusCode::TOO_MANY_REQUESTS,
        ),
        (
            AuthError::BlockingTask {
                message: "panicked".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(ApiError::from(error).status(), expected);
    }
}

#[tokio::test]
async fn given_token_lifetime_failure_when_converted_then_returns_500_without_field_errors() {
    // Given
    let error = ApiError::from(AuthError::TokenLifetime {
        message: "ttl not representable".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["mensagem"], "Erro interno do servidor");
    assert!(json.get("erros").is_none());
}

#[tokio::test]
async fn given_store_conflict_when_converted_then_returns_409_without_constraint_name() {
    // Given
    let error = ApiError::from(DbError::Conflict {
        constraint: Some("usuarios_email_live_key".into()),
        message: "duplicate key".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["mensagem"], "Email ou CPF já está em uso");
    assert!(!json.to_string().contains("usuarios_email_live_key"));
}

#[test]
fn given_store_initialization_failure_when_converted_then_returns_500() {
    let error = ApiError::from(DbError::Initialization {
        message: "pool closed".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn given_core_validation_error_when_converted_then_names_the_field() {
    let error = ApiError::from(CoreError::Validation {
        message: "Limite deve ser um número entre 1 e 100".into(),
        field: Some("limite".into()),
        location: ErrorLocation::from(Location::caller()),
    });

    match error {
        ApiError::Validation {
            message, errors, ..
        } => {
            assert_eq!(message, "Parâmetros inválidos");
            assert_eq!(errors, vec![FieldError::new("limite", "Limite deve ser um número entre 1 e 100")]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
