//! Response envelope shared by every endpoint:
//! `{ sucesso, mensagem, dados?, erros? }`

use crate::FieldError;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub sucesso: bool,
    pub mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erros: Option<Vec<FieldError>>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful response carrying a payload
    pub fn with_data(mensagem: impl Into<String>, dados: T) -> Self {
        Self {
            sucesso: true,
            mensagem: mensagem.into(),
            dados: Some(dados),
            erros: None,
        }
    }
}

impl Envelope<()> {
    /// Successful response without `dados`
    pub fn message(mensagem: impl Into<String>) -> Self {
        Self {
            sucesso: true,
            mensagem: mensagem.into(),
            dados: None,
            erros: None,
        }
    }

    /// Failure response, with field errors when there are any
    pub fn failure(mensagem: impl Into<String>, erros: Vec<FieldError>) -> Self {
        Self {
            sucesso: false,
            mensagem: mensagem.into(),
            dados: None,
            erros: if erros.is_empty() { None } else { Some(erros) },
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
