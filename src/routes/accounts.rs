//! Account routes — registration, login, profile edit, deletion with
//! cascade.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::record_id;
use crate::routes::{ApiError, Field, internal_error, optional_text, text_field};
use crate::services::account::{self, AccountError, AccountRow, ProfileChanges};
use crate::state::AppState;

/// Wire shape of an account record. `password` carries the stored bcrypt
/// digest; a plaintext credential never reaches a response.
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub password: String,
}

fn to_response(row: AccountRow) -> AccountResponse {
    AccountResponse {
        id: row.id,
        nome: row.name,
        email: row.email,
        password: row.password_hash,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    email: Option<Value>,
    password: Option<Value>,
}

/// `POST /account/login`
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<Value>, ApiError> {
    let (email, password) = match (text_field(body.email.as_ref()), text_field(body.password.as_ref())) {
        (Field::Text(email), Field::Text(password)) => (email, password),
        (Field::Missing, _) | (_, Field::Missing) => {
            return Err(ApiError::bad_request("Dati mancanti"));
        }
        _ => return Err(ApiError::bad_request("I dati non sono di tipo string")),
    };

    let row = account::login(&state.pool, email, password)
        .await
        .map_err(|err| login_error(err, email))?;

    Ok(Json(json!({
        "message": "Login effettuato con successo",
        "account": to_response(row),
    })))
}

#[derive(Deserialize)]
pub struct RegisterBody {
    nome: Option<Value>,
    email: Option<Value>,
    password: Option<Value>,
}

/// `POST /account/registra`
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<Value>, ApiError> {
    let fields = (
        text_field(body.nome.as_ref()),
        text_field(body.email.as_ref()),
        text_field(body.password.as_ref()),
    );
    let (nome, email, password) = match fields {
        (Field::Text(nome), Field::Text(email), Field::Text(password)) => (nome, email, password),
        (Field::Missing, _, _) | (_, Field::Missing, _) | (_, _, Field::Missing) => {
            return Err(ApiError::bad_request("Dati mancanti"));
        }
        _ => return Err(ApiError::bad_request("I dati non sono di tipo string")),
    };

    let row = account::register(&state.pool, nome, email, password)
        .await
        .map_err(register_error)?;

    Ok(Json(json!({
        "message": "Account registrato con successo",
        "account": to_response(row),
    })))
}

/// `DELETE /account/elimina/:idAccount`
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id_account): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_account) {
        return Err(ApiError::bad_request("I dati non sono di tipo string"));
    }

    let outcome = account::delete_account(&state.pool, &id_account)
        .await
        .map_err(delete_error)?;

    tracing::info!(
        account_id = %id_account,
        deleted_lists = outcome.deleted_lists,
        deleted_histories = outcome.deleted_histories,
        "account deleted with cascade"
    );

    Ok(Json(json!({ "message": "Account e relative liste eliminate con successo" })))
}

#[derive(Deserialize)]
pub struct UpdateProfileBody {
    nome: Option<Value>,
    email: Option<Value>,
    #[serde(rename = "nuovaPassword")]
    nuova_password: Option<Value>,
    #[serde(rename = "vecchiaPassword")]
    vecchia_password: Option<Value>,
}

/// `PUT /account/modifica/:idAccount`
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id_account): Path<String>,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<Value>, ApiError> {
    if !record_id::is_valid(&id_account) {
        return Err(ApiError::bad_request("idAccount non definito o non valido"));
    }

    let changes = ProfileChanges {
        old_password: optional_text(body.vecchia_password.as_ref())?,
        name: optional_text(body.nome.as_ref())?,
        email: optional_text(body.email.as_ref())?,
        password: optional_text(body.nuova_password.as_ref())?,
    };

    let row = account::update_profile(&state.pool, &id_account, &changes)
        .await
        .map_err(update_error)?;

    Ok(Json(json!({
        "message": "Account modificato con successo",
        "account": to_response(row),
    })))
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn login_error(err: AccountError, email: &str) -> ApiError {
    match err {
        AccountError::NotFound => {
            ApiError::not_found(format!("Nessun account associato alla mail: {email}"))
        }
        AccountError::WrongPassword => ApiError::unauthorized("Password errata"),
        other => internal_error(other, "Errore durante il login"),
    }
}

fn register_error(err: AccountError) -> ApiError {
    match err {
        AccountError::EmailTaken => {
            ApiError::conflict("Esiste gia un account registrato con questa email")
        }
        other => internal_error(other, "Errore durante la registrazione"),
    }
}

fn delete_error(err: AccountError) -> ApiError {
    match err {
        AccountError::NotFound => ApiError::not_found("Account non trovato"),
        other => internal_error(other, "Errore durante l eliminazione dell account"),
    }
}

fn update_error(err: AccountError) -> ApiError {
    match err {
        AccountError::NotFound => ApiError::not_found("Account non trovato"),
        AccountError::MissingPassword => ApiError::unauthorized("Password mancante"),
        AccountError::WrongOldPassword => ApiError::unauthorized("Vecchia password non corretta"),
        AccountError::EmailTaken => {
            ApiError::conflict("Esiste gia un account registrato con questa email")
        }
        other => internal_error(other, "Errore durante la modifica dell account"),
    }
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
