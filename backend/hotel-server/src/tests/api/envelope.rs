use crate::{Envelope, FieldError};

use serde_json::json;

#[test]
fn given_payload_when_serialized_then_erros_is_omitted() {
    let envelope = Envelope::with_data("ok", json!({ "token": "abc" }));

    let value = serde_json::to_value(&envelope).unwrap();

    assert_eq!(
        value,
        json!({ "sucesso": true, "mensagem": "ok", "dados": { "token": "abc" } })
    );
}

#[test]
fn given_message_only_when_serialized_then_dados_is_omitted() {
    let value = serde_json::to_value(Envelope::message("Usuário deletado com sucesso")).unwrap();

    assert_eq!(
        value,
        json!({ "sucesso": true, "mensagem": "Usuário deletado com sucesso" })
    );
}

#[test]
fn given_failure_without_field_errors_when_serialized_then_erros_is_omitted() {
    let value = serde_json::to_value(Envelope::failure("Token inválido", Vec::new())).unwrap();

    assert_eq!(value, json!({ "sucesso": false, "mensagem": "Token inválido" }));
}

#[test]
fn given_failure_with_field_errors_when_serialized_then_erros_lists_them() {
    let envelope = Envelope::failure(
        "Dados inválidos",
        vec![FieldError::new("email", "Email inválido")],
    );

    let value = serde_json::to_value(&envelope).unwrap();

    assert_eq!(value["sucesso"], false);
    assert_eq!(
        value["erros"],
        json!([{ "campo": "email", "mensagem": "Email inválido" }])
    );
}
