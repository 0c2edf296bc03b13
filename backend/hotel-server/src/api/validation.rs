//! Field rules shared by the request DTOs.
//!
//! Messages are the Portuguese strings the web client shows verbatim.

use crate::FieldError;

use hotel_core::{MAX_PAGE_SIZE, PageRequest};

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX should be a valid regex pattern")
});

// (XX) XXXX-XXXX or (XX) XXXXX-XXXX
static TELEFONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$")
        .expect("TELEFONE_REGEX should be a valid regex pattern")
});

const MIN_NOME_LENGTH: usize = 2;
const MIN_SENHA_LENGTH: usize = 6;
const CPF_DIGITS: usize = 11;
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_nome(nome: &str) -> Result<(), ValidationError> {
    if nome.trim().chars().count() < MIN_NOME_LENGTH {
        return Err(invalid("nome", "Nome deve ter pelo menos 2 caracteres"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(email.trim()) {
        return Err(invalid("email", "Email inválido"));
    }
    Ok(())
}

pub fn validate_senha(senha: &str) -> Result<(), ValidationError> {
    if senha.chars().count() < MIN_SENHA_LENGTH {
        return Err(invalid("senha", "Senha deve ter pelo menos 6 caracteres"));
    }
    Ok(())
}

/// Login only checks that a password was sent
pub fn validate_senha_presente(senha: &str) -> Result<(), ValidationError> {
    if senha.is_empty() {
        return Err(invalid("senha", "Senha é obrigatória"));
    }
    Ok(())
}

pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if normalize_cpf(cpf).len() != CPF_DIGITS {
        return Err(invalid("cpf", "CPF deve ter 11 dígitos"));
    }
    Ok(())
}

pub fn validate_telefone(telefone: &str) -> Result<(), ValidationError> {
    if !TELEFONE_REGEX.is_match(telefone) {
        return Err(invalid(
            "telefone",
            "Telefone deve estar no formato (XX) XXXXX-XXXX",
        ));
    }
    Ok(())
}

pub fn validate_data_nascimento(data: &str) -> Result<(), ValidationError> {
    if parse_birth_date(data).is_none() {
        return Err(invalid("data_nascimento", "Data de nascimento inválida"));
    }
    Ok(())
}

pub fn validate_pagina(pagina: &str) -> Result<(), ValidationError> {
    match pagina.trim().parse::<u32>() {
        Ok(page) if page >= 1 => Ok(()),
        _ => Err(invalid(
            "pagina",
            "Página deve ser um número inteiro maior que 0",
        )),
    }
}

pub fn validate_limite(limite: &str) -> Result<(), ValidationError> {
    match limite.trim().parse::<u32>() {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(()),
        _ => Err(invalid("limite", "Limite deve ser um número entre 1 e 100")),
    }
}

/// CPF with everything but digits stripped
pub fn normalize_cpf(cpf: &str) -> String {
    cpf.chars().filter(char::is_ascii_digit).collect()
}

pub fn parse_birth_date(data: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(data.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Parse already-validated `pagina`/`limite` strings, defaulting to page 1 of 10
pub fn page_request(
    pagina: Option<&str>,
    limite: Option<&str>,
) -> hotel_core::Result<PageRequest> {
    let defaults = PageRequest::default();
    let page = pagina
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(defaults.page());
    let page_size = limite
        .and_then(|l| l.trim().parse().ok())
        .unwrap_or(defaults.page_size());

    PageRequest::new(page, page_size)
}

/// Flatten validator output into the `erros` list, ordered by field
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let mensagem = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Campo {} inválido", field));
                FieldError::new(field.to_string(), mensagem)
            })
        })
        .collect();

    fields.sort_by(|a, b| a.campo.cmp(&b.campo));
    fields
}
