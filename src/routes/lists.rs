//! Shopping-list routes.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::record_id;
use crate::routes::{ApiError, Field, internal_error, text_field};
use crate::services::list::{self, ListError, ListRow};
use crate::state::AppState;

/// Wire shape of a list record.
#[derive(Serialize)]
pub struct ListResponse {
    pub id: String,
    pub titolo: String,
    pub oggetti: Vec<String>,
    #[serde(rename = "idAccount")]
    pub id_account: String,
    #[serde(rename = "dataUltimaModifica")]
    pub data_ultima_modifica: i64,
}

fn to_response(row: ListRow) -> ListResponse {
    ListResponse {
        id: row.id,
        titolo: row.title,
        oggetti: row.items,
        id_account: row.owner_account_id,
        data_ultima_modifica: row.last_modified_at_ms,
    }
}

/// Items must arrive as a JSON array of strings; anything else is rejected.
/// An empty array is a valid list body.
fn items_field(value: Option<&Value>) -> Option<Vec<String>> {
    let Some(Value::Array(values)) = value else {
        return None;
    };
    values
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /liste` — every list in the store, as a bare array.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<ListResponse>>, ApiError> {
    let rows = list::list_all(&state.pool)
        .await
        .map_err(|err| internal_error(err, "Errore durante il recupero delle liste."))?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `GET /liste/:idAccount` — every list owned by one account. An owner with
/// no lists gets a 200 with an empty array.
pub async fn list_by_owner(
    State(state): State<AppState>,
    Path(id_account): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_account) {
        return Err(ApiError::bad_request("ID account mancante o non valido"));
    }

    let rows = list::list_by_owner(&state.pool, &id_account)
        .await
        .map_err(|err| internal_error(err, "Errore durante il recupero delle liste"))?;

    let liste: Vec<ListResponse> = rows.into_iter().map(to_response).collect();
    Ok(Json(json!({
        "message": format!("Liste dell'account con id {id_account}"),
        "liste": liste,
    })))
}

#[derive(Deserialize)]
pub struct CreateListBody {
    titolo: Option<Value>,
    oggetti: Option<Value>,
    #[serde(rename = "idAccount")]
    id_account: Option<Value>,
}

/// `POST /liste`
pub async fn create_list(
    State(state): State<AppState>,
    Json(body): Json<CreateListBody>,
) -> Result<Json<Value>, ApiError> {
    let bad_body =
        || ApiError::bad_request("Nel body mancano i dati oppure sono presenti dati non validi");

    let (Field::Text(titolo), Field::Text(id_account)) =
        (text_field(body.titolo.as_ref()), text_field(body.id_account.as_ref()))
    else {
        return Err(bad_body());
    };
    let Some(oggetti) = items_field(body.oggetti.as_ref()) else {
        return Err(bad_body());
    };

    let row = list::create_list(&state.pool, titolo, &oggetti, id_account)
        .await
        .map_err(|err| internal_error(err, "Errore durante l aggiunta di una nuova lista"))?;

    Ok(Json(json!({
        "message": "Lista salvata con successo",
        "lista_salvata": to_response(row),
    })))
}

#[derive(Deserialize)]
pub struct UpdateListBody {
    titolo: Option<Value>,
    oggetti: Option<Value>,
}

/// `PUT /liste/:idLista`
pub async fn update_list(
    State(state): State<AppState>,
    Path(id_lista): Path<String>,
    Json(body): Json<UpdateListBody>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_lista) {
        return Err(ApiError::bad_request("ID della lista mancante o non valido"));
    }
    let Field::Text(titolo) = text_field(body.titolo.as_ref()) else {
        return Err(ApiError::bad_request("titolo non trovato"));
    };
    let Some(oggetti) = items_field(body.oggetti.as_ref()) else {
        return Err(ApiError::bad_request("oggetti della lista non trovati"));
    };

    let row = list::update_list(&state.pool, &id_lista, titolo, &oggetti)
        .await
        .map_err(update_error)?;

    Ok(Json(json!({
        "message": "Lista modificata con successo",
        "lista_modificata": to_response(row),
    })))
}

/// `DELETE /liste/:idLista`
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id_lista): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_lista) {
        return Err(ApiError::bad_request("ID della lista mancante o non valido"));
    }

    list::delete_list(&state.pool, &id_lista)
        .await
        .map_err(delete_error)?;

    Ok(Json(json!({ "message": "Lista eliminata con successo" })))
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn update_error(err: ListError) -> ApiError {
    match err {
        ListError::NotFound(_) => ApiError::not_found("Lista non trovata"),
        other => internal_error(other, "Errore durante la modifica della lista"),
    }
}

fn delete_error(err: ListError) -> ApiError {
    match err {
        ListError::NotFound(_) => ApiError::not_found("Lista non trovata"),
        other => internal_error(other, "Errore durante l eliminazione della lista"),
    }
}

#[cfg(test)]
#[path = "lists_test.rs"]
mod tests;
