use super::*;
use axum::http::StatusCode;

fn sample_row() -> ListRow {
    ListRow {
        id: "5c5c5c5c5c5c5c5c5c5c5c5c".into(),
        title: "Spesa settimanale".into(),
        items: vec!["latte".into(), "pane".into(), "latte".into()],
        owner_account_id: "5f5f5f5f5f5f5f5f5f5f5f5f".into(),
        last_modified_at_ms: 1_700_000_000_000,
    }
}

// =============================================================================
// items_field
// =============================================================================

#[test]
fn items_field_accepts_string_array() {
    let value = json!(["oggetto1", "oggetto2"]);
    assert_eq!(
        items_field(Some(&value)),
        Some(vec!["oggetto1".to_string(), "oggetto2".to_string()])
    );
}

#[test]
fn items_field_accepts_empty_array() {
    let value = json!([]);
    assert_eq!(items_field(Some(&value)), Some(Vec::new()));
}

#[test]
fn items_field_keeps_duplicates_and_order() {
    let value = json!(["a", "b", "a"]);
    assert_eq!(
        items_field(Some(&value)),
        Some(vec!["a".to_string(), "b".to_string(), "a".to_string()])
    );
}

#[test]
fn items_field_rejects_mixed_array() {
    let value = json!(["oggetto1", 2]);
    assert_eq!(items_field(Some(&value)), None);
}

#[test]
fn items_field_rejects_non_array() {
    let value = json!("oggetto1");
    assert_eq!(items_field(Some(&value)), None);
}

#[test]
fn items_field_rejects_absent() {
    assert_eq!(items_field(None), None);
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[test]
fn update_error_unknown_list_is_404() {
    let err = update_error(ListError::NotFound("5c5c5c5c5c5c5c5c5c5c5c5c".into()));
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.message, "Lista non trovata");
}

#[test]
fn update_error_database_is_500() {
    let err = update_error(ListError::Database(sqlx::Error::PoolClosed));
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Errore durante la modifica della lista");
}

#[test]
fn delete_error_unknown_list_is_404() {
    let err = delete_error(ListError::NotFound("5c5c5c5c5c5c5c5c5c5c5c5c".into()));
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.message, "Lista non trovata");
}

#[test]
fn delete_error_database_is_500() {
    let err = delete_error(ListError::Database(sqlx::Error::PoolClosed));
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Errore durante l eliminazione della lista");
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

#[test]
fn list_response_uses_wire_keys() {
    let value = serde_json::to_value(to_response(sample_row())).unwrap();
    assert_eq!(value["id"], "5c5c5c5c5c5c5c5c5c5c5c5c");
    assert_eq!(value["titolo"], "Spesa settimanale");
    assert_eq!(value["oggetti"], json!(["latte", "pane", "latte"]));
    assert_eq!(value["idAccount"], "5f5f5f5f5f5f5f5f5f5f5f5f");
    assert_eq!(value["dataUltimaModifica"], 1_700_000_000_000_i64);
}

#[test]
fn list_response_has_no_internal_keys() {
    let value = serde_json::to_value(to_response(sample_row())).unwrap();
    assert!(value.get("owner_account_id").is_none());
    assert!(value.get("last_modified_at_ms").is_none());
    assert!(value.get("items").is_none());
}
