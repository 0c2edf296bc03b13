use crate::api::validation::{
    field_errors, normalize_cpf, page_request, parse_birth_date, validate_cpf,
    validate_data_nascimento, validate_email, validate_limite, validate_nome, validate_pagina,
    validate_senha, validate_senha_presente, validate_telefone,
};
use crate::{ListUsersQuery, RegisterRequest, UpdateUserRequest};

use chrono::NaiveDate;
use googletest::prelude::*;
use validator::Validate;

#[test]
fn given_short_or_blank_nome_when_validated_then_rejected() {
    assert!(validate_nome("Ana").is_ok());
    assert!(validate_nome("A").is_err());
    assert!(validate_nome("   A   ").is_err());
}

#[test]
fn given_email_shapes_when_validated_then_only_addresses_pass() {
    assert!(validate_email("ana@x.com").is_ok());
    assert!(validate_email("  Ana@Example.COM ").is_ok());
    assert!(validate_email("ana@x").is_err());
    assert!(validate_email("ana x@y.com").is_err());
    assert!(validate_email("").is_err());
}

#[test]
fn given_senha_when_validated_then_registration_requires_six_and_login_requires_any() {
    assert!(validate_senha("123456").is_ok());
    assert!(validate_senha("12345").is_err());
    assert!(validate_senha_presente("1").is_ok());
    assert!(validate_senha_presente("").is_err());
}

#[test]
fn given_cpf_with_punctuation_when_normalized_then_only_digits_remain() {
    assert_eq!(normalize_cpf("123.456.789-09"), "12345678909");
    assert!(validate_cpf("123.456.789-09").is_ok());
    assert!(validate_cpf("1234567890").is_err());
}

#[test]
fn given_telefone_when_validated_then_both_brazilian_formats_pass() {
    assert!(validate_telefone("(11) 91234-5678").is_ok());
    assert!(validate_telefone("(11) 1234-5678").is_ok());
    assert!(validate_telefone("11912345678").is_err());
}

#[test]
fn given_birth_date_when_parsed_then_iso_format_is_required() {
    assert_eq!(
        parse_birth_date("1990-05-17"),
        NaiveDate::from_ymd_opt(1990, 5, 17)
    );
    assert!(validate_data_nascimento("17/05/1990").is_err());
    assert!(validate_data_nascimento("1990-02-30").is_err());
}

#[test]
fn given_pagination_strings_when_validated_then_bounds_apply() {
    assert!(validate_pagina("1").is_ok());
    assert!(validate_pagina("0").is_err());
    assert!(validate_pagina("abc").is_err());
    assert!(validate_limite("100").is_ok());
    assert!(validate_limite("101").is_err());
    assert!(validate_limite("0").is_err());
}

#[test]
fn given_no_pagination_when_building_page_request_then_defaults_to_first_ten() {
    let page = page_request(None, None).unwrap();

    assert_that!(page.page(), eq(1));
    assert_that!(page.page_size(), eq(10));
}

#[test]
fn given_explicit_pagination_when_building_page_request_then_values_are_used() {
    let page = page_request(Some("3"), Some("25")).unwrap();

    assert_that!(page.page(), eq(3));
    assert_that!(page.page_size(), eq(25));
    assert_that!(page.offset(), eq(50));
}

#[test]
fn given_empty_register_body_when_validated_then_each_required_field_is_reported() {
    // Given
    let request = RegisterRequest::default();

    // When
    let errors = request.validate().unwrap_err();
    let fields = field_errors(&errors);

    // Then
    let campos: Vec<&str> = fields.iter().map(|f| f.campo.as_str()).collect();
    assert_eq!(campos, vec!["email", "nome", "senha"]);
    assert_eq!(fields[1].mensagem, "Nome deve ter pelo menos 2 caracteres");
}

#[test]
fn given_register_body_with_bad_optionals_when_validated_then_optionals_are_reported() {
    let request = RegisterRequest {
        nome: "Ana".into(),
        email: "ana@x.com".into(),
        senha: "123456".into(),
        telefone: Some("123".into()),
        cpf: Some("12".into()),
        ..Default::default()
    };

    let fields = field_errors(&request.validate().unwrap_err());

    let campos: Vec<&str> = fields.iter().map(|f| f.campo.as_str()).collect();
    assert_eq!(campos, vec!["cpf", "telefone"]);
}

#[test]
fn given_update_body_with_unknown_fields_when_deserialized_then_they_are_ignored() {
    // Given
    let body = r#"{"nome":"Ana Maria","id":"x","active":false,"deleted_at":"2020-01-01"}"#;

    // When
    let request: UpdateUserRequest = serde_json::from_str(body).unwrap();

    // Then
    assert!(request.validate().is_ok());
    let changes = request.into_changes(None);
    assert_eq!(changes.display_name.as_deref(), Some("Ana Maria"));
    assert!(changes.email.is_none());
    assert!(changes.credential_hash.is_none());
}

#[test]
fn given_update_email_when_converted_then_it_is_normalized() {
    let request = UpdateUserRequest {
        email: Some("  Ana@X.COM ".into()),
        cpf: Some(Some("123.456.789-09".into())),
        ..Default::default()
    };

    let changes = request.into_changes(None);

    assert_that!(changes.email, some(eq("ana@x.com")));
    assert_that!(changes.national_id, some(some(eq("12345678909"))));
}

#[test]
fn given_update_body_with_nulls_when_converted_then_null_clears_and_absent_keeps() {
    // Given
    let body = r#"{"telefone":null,"cpf":null}"#;

    // When
    let request: UpdateUserRequest = serde_json::from_str(body).unwrap();

    // Then
    assert!(request.validate().is_ok());
    let changes = request.into_changes(None);
    assert_that!(changes.phone, some(none()));
    assert_that!(changes.national_id, some(none()));
    assert_that!(changes.pronoun, none());
    assert_that!(changes.birth_date, none());
    assert!(!changes.is_empty());
}

#[test]
fn given_update_body_with_bad_telefone_when_validated_then_reported() {
    let request: UpdateUserRequest =
        serde_json::from_str(r#"{"telefone":"123","pronome":null}"#).unwrap();

    let fields = field_errors(&request.validate().unwrap_err());

    assert_that!(fields, len(eq(1)));
    assert_that!(fields[0].campo, eq("telefone"));
}

#[test]
fn given_non_numeric_limite_when_validated_then_reported_as_field_error() {
    let query = ListUsersQuery {
        pagina: None,
        limite: Some("muitos".into()),
    };

    let fields = field_errors(&query.validate().unwrap_err());

    assert_that!(fields, len(eq(1)));
    assert_that!(fields[0].campo, eq("limite"));
    assert_that!(
        fields[0].mensagem,
        eq("Limite deve ser um número entre 1 e 100")
    );
}
