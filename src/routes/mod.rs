//! Router assembly and shared response plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! One resource router per record collection: `/account` (identity),
//! `/liste` (shopping lists), `/oggetti` (item history). Every response body
//! is JSON; successes wrap their payload in a `message` envelope and failures
//! carry a single `error` string.

pub mod accounts;
pub mod items;
pub mod lists;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post, put};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/account/login", post(accounts::login))
        .route("/account/registra", post(accounts::register))
        .route("/account/elimina/{idAccount}", delete(accounts::delete_account))
        .route("/account/modifica/{idAccount}", put(accounts::update_profile))
        .route("/liste", get(lists::list_all).post(lists::create_list))
        .route(
            "/liste/{id}",
            get(lists::list_by_owner)
                .put(lists::update_list)
                .delete(lists::delete_list),
        )
        .route("/oggetti/rimuovi/{idAccount}", put(items::remove_item))
        .route(
            "/oggetti/{idAccount}",
            get(items::list_items)
                .put(items::add_item)
                .delete(items::delete_history),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// ERROR ENVELOPE
// =============================================================================

/// A terminal request failure: an HTTP status plus the single `error` string
/// the caller sees.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self { status: StatusCode::UNAUTHORIZED, message: message.into() }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self { status: StatusCode::CONFLICT, message: message.into() }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Log an unexpected store-level failure and map it to the action-specific
/// 500 message.
pub(crate) fn internal_error(err: impl std::fmt::Display, message: impl Into<String>) -> ApiError {
    let message = message.into();
    tracing::error!(error = %err, "{message}");
    ApiError::internal(message)
}

// =============================================================================
// BODY FIELD CLASSIFICATION
// =============================================================================

/// Classification of a free-form JSON body field. Absent, `null`, and the
/// empty string all count as missing; any other non-string value is a type
/// error.
pub(crate) enum Field<'a> {
    Missing,
    WrongType,
    Text(&'a str),
}

pub(crate) fn text_field(value: Option<&Value>) -> Field<'_> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::String(s)) if s.is_empty() => Field::Missing,
        Some(Value::String(s)) => Field::Text(s),
        Some(_) => Field::WrongType,
    }
}

/// Classify an optional text field: missing stays `None`, a non-string is a
/// 400 with the standard type message.
pub(crate) fn optional_text(value: Option<&Value>) -> Result<Option<&str>, ApiError> {
    match text_field(value) {
        Field::Text(s) => Ok(Some(s)),
        Field::Missing => Ok(None),
        Field::WrongType => Err(ApiError::bad_request("I dati non sono di tipo string")),
    }
}
