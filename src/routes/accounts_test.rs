use super::*;
use axum::http::StatusCode;

// =============================================================================
// text_field / optional_text
// =============================================================================

#[test]
fn text_field_absent_is_missing() {
    assert!(matches!(text_field(None), Field::Missing));
}

#[test]
fn text_field_null_is_missing() {
    assert!(matches!(text_field(Some(&Value::Null)), Field::Missing));
}

#[test]
fn text_field_empty_string_is_missing() {
    let value = json!("");
    assert!(matches!(text_field(Some(&value)), Field::Missing));
}

#[test]
fn text_field_number_is_wrong_type() {
    let value = json!(123);
    assert!(matches!(text_field(Some(&value)), Field::WrongType));
}

#[test]
fn text_field_string_is_text() {
    let value = json!("mario@example.com");
    match text_field(Some(&value)) {
        Field::Text(s) => assert_eq!(s, "mario@example.com"),
        _ => panic!("expected text"),
    }
}

#[test]
fn optional_text_absent_is_none() {
    assert_eq!(optional_text(None).unwrap(), None);
}

#[test]
fn optional_text_string_is_some() {
    let value = json!("NuovoNome");
    assert_eq!(optional_text(Some(&value)).unwrap(), Some("NuovoNome"));
}

#[test]
fn optional_text_number_is_bad_request() {
    let value = json!(42);
    let err = optional_text(Some(&value)).unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "I dati non sono di tipo string");
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[test]
fn login_error_unknown_email_is_404_with_email() {
    let err = login_error(AccountError::NotFound, "ghost@example.com");
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.message, "Nessun account associato alla mail: ghost@example.com");
}

#[test]
fn login_error_wrong_password_is_401() {
    let err = login_error(AccountError::WrongPassword, "mario@example.com");
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, "Password errata");
}

#[test]
fn login_error_database_is_500() {
    let err = login_error(AccountError::Database(sqlx::Error::PoolClosed), "mario@example.com");
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Errore durante il login");
}

#[test]
fn register_error_taken_email_is_409() {
    let err = register_error(AccountError::EmailTaken);
    assert_eq!(err.status, StatusCode::CONFLICT);
    assert_eq!(err.message, "Esiste gia un account registrato con questa email");
}

#[test]
fn register_error_database_is_500() {
    let err = register_error(AccountError::Database(sqlx::Error::PoolClosed));
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Errore durante la registrazione");
}

#[test]
fn delete_error_unknown_account_is_404() {
    let err = delete_error(AccountError::NotFound);
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.message, "Account non trovato");
}

#[test]
fn update_error_missing_password_is_401() {
    let err = update_error(AccountError::MissingPassword);
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, "Password mancante");
}

#[test]
fn update_error_wrong_old_password_is_401() {
    let err = update_error(AccountError::WrongOldPassword);
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, "Vecchia password non corretta");
}

#[test]
fn update_error_taken_email_is_409() {
    let err = update_error(AccountError::EmailTaken);
    assert_eq!(err.status, StatusCode::CONFLICT);
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

#[test]
fn account_response_uses_wire_keys() {
    let row = AccountRow {
        id: "656d99094e20e227874eac45".into(),
        name: "Mario".into(),
        email: "mario@example.com".into(),
        password_hash: "$2b$12$abcdefghijklmnopqrstuv".into(),
    };
    let value = serde_json::to_value(to_response(row)).unwrap();
    assert_eq!(value["id"], "656d99094e20e227874eac45");
    assert_eq!(value["nome"], "Mario");
    assert_eq!(value["email"], "mario@example.com");
    assert_eq!(value["password"], "$2b$12$abcdefghijklmnopqrstuv");
}

#[test]
fn account_response_never_carries_a_plaintext_key() {
    let row = AccountRow {
        id: "656d99094e20e227874eac45".into(),
        name: "Mario".into(),
        email: "mario@example.com".into(),
        password_hash: "$2b$12$abcdefghijklmnopqrstuv".into(),
    };
    let value = serde_json::to_value(to_response(row)).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    assert!(value.get("password_hash").is_none());
}
