use crate::AppState;
use crate::api::error::{ErrorDetail, INTERNAL_ERROR_MESSAGE};

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// In development, rewrite 500 envelopes to carry `detalhes`.
/// Responses pass through untouched unless `server.expose_error_details` is set.
pub async fn expose_error_details(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if !state.expose_error_details {
        return response;
    }

    let detail = response.extensions().get::<ErrorDetail>().cloned();
    match detail {
        Some(ErrorDetail(detail)) => {
            let body = json!({
                "sucesso": false,
                "mensagem": INTERNAL_ERROR_MESSAGE,
                "detalhes": detail,
            });
            (response.status(), Json(body)).into_response()
        }
        None => response,
    }
}
