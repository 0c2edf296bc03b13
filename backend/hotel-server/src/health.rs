use axum::{
    Json,
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const API_VERSION: &str = "1.0.0";

/// GET /health - liveness check
pub async fn health_check() -> Response {
    let health = json!({
        "sucesso": true,
        "mensagem": "API Hotel DotEnv está funcionando",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "versao": API_VERSION,
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /api - endpoint directory
pub async fn api_directory() -> Response {
    let directory = json!({
        "sucesso": true,
        "mensagem": "API Hotel DotEnv",
        "versao": API_VERSION,
        "endpoints": {
            "auth": {
                "POST /api/auth/register": "Registrar novo usuário",
                "POST /api/auth/login": "Login do usuário",
                "POST /api/auth/verify-token": "Verificar token JWT",
                "POST /api/auth/refresh-token": "Renovar token JWT",
            },
            "usuarios": {
                "GET /api/usuarios": "Listar usuários (com paginação)",
                "GET /api/usuarios/:id": "Buscar usuário por ID",
                "PUT /api/usuarios/:id": "Atualizar usuário",
                "DELETE /api/usuarios/:id": "Deletar usuário (soft delete)",
                "GET /api/usuarios/profile/me": "Buscar perfil do usuário logado",
                "PUT /api/usuarios/profile/me": "Atualizar perfil do usuário logado",
            },
        },
        "autenticacao": "Bearer Token JWT",
        "exemplo_headers": {
            "Authorization": "Bearer seu_token_jwt_aqui",
            "Content-Type": "application/json",
        },
    });

    (StatusCode::OK, Json(directory)).into_response()
}

/// Fallback for unknown routes and unsupported methods
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    let rota = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    log::debug!("No route for {} {}", method, rota);

    let body = json!({
        "sucesso": false,
        "mensagem": "Rota não encontrada",
        "rota": rota,
        "metodo": method.as_str(),
    });

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
