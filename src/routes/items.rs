//! Item-history routes — the per-account set of previously-used items.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::record_id;
use crate::routes::{ApiError, Field, internal_error, text_field};
use crate::services::item_history::{self, HistoryError, HistoryRow};
use crate::state::AppState;

/// Wire shape of an item-history record.
#[derive(Serialize)]
pub struct HistoryResponse {
    pub id: String,
    #[serde(rename = "idAccount")]
    pub id_account: String,
    pub oggetti: Vec<String>,
}

fn to_response(row: HistoryRow) -> HistoryResponse {
    HistoryResponse { id: row.id, id_account: row.owner_account_id, oggetti: row.items }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /oggetti/:idAccount` — items the account has ever used; an account
/// with no history gets a 200 with an empty array.
pub async fn list_items(
    State(state): State<AppState>,
    Path(id_account): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_account) {
        return Err(ApiError::bad_request("ID account mancante o non valido"));
    }

    let oggetti = item_history::list_items(&state.pool, &id_account)
        .await
        .map_err(|err| {
            internal_error(
                err,
                format!("Errore durante il recupero degli oggetti relativi all account: {id_account}"),
            )
        })?;

    Ok(Json(json!({
        "message": format!("Oggetti inseriti da {id_account}"),
        "oggetti": oggetti,
    })))
}

#[derive(Deserialize)]
pub struct ItemBody {
    oggetto: Option<Value>,
}

/// `PUT /oggetti/:idAccount` — add an item, creating the history record on
/// first use; re-adding a known item is a success that changes nothing.
pub async fn add_item(
    State(state): State<AppState>,
    Path(id_account): Path<String>,
    Json(body): Json<ItemBody>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_account) {
        return Err(ApiError::bad_request("ID account non valido"));
    }
    let Field::Text(oggetto) = text_field(body.oggetto.as_ref()) else {
        return Err(ApiError::bad_request("Oggetto mancante nel body"));
    };

    let row = item_history::add_item(&state.pool, &id_account, oggetto)
        .await
        .map_err(|err| internal_error(err, format!("Errore durante l aggiunta dell oggetto {oggetto}")))?;

    Ok(Json(json!({
        "message": "Lista modificata con successo",
        "lista_modificata": to_response(row),
    })))
}

/// `PUT /oggetti/rimuovi/:idAccount` — remove every occurrence of an item;
/// removing an absent item succeeds with the record unchanged.
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id_account): Path<String>,
    Json(body): Json<ItemBody>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_account) {
        return Err(ApiError::bad_request("ID account non valido"));
    }
    let Field::Text(oggetto) = text_field(body.oggetto.as_ref()) else {
        return Err(ApiError::bad_request("Oggetto mancante nel body"));
    };

    let row = item_history::remove_item(&state.pool, &id_account, oggetto)
        .await
        .map_err(|err| remove_error(err, oggetto))?;

    Ok(Json(json!({
        "message": "Elemento eliminato con successo",
        "lista_modificata": to_response(row),
    })))
}

/// `DELETE /oggetti/:idAccount`
pub async fn delete_history(
    State(state): State<AppState>,
    Path(id_account): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_account) {
        return Err(ApiError::bad_request("ID account non valido"));
    }

    item_history::delete_history(&state.pool, &id_account)
        .await
        .map_err(delete_error)?;

    Ok(Json(json!({ "message": "Eliminazione avvenuta con successo" })))
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn remove_error(err: HistoryError, oggetto: &str) -> ApiError {
    match err {
        HistoryError::NotFound(_) => {
            ApiError::not_found("Nessun documento trovato con l ID account specificato")
        }
        other => internal_error(other, format!("Errore durante la rimozione dell oggetto {oggetto}")),
    }
}

fn delete_error(err: HistoryError) -> ApiError {
    match err {
        HistoryError::NotFound(_) => ApiError::not_found("Lista non trovata"),
        other => internal_error(other, "Errore durante la rimozione della lista di oggetti"),
    }
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
