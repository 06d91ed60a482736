//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! services hold no in-memory state of their own; the pool is the only shared
//! resource.

use sqlx::PgPool;

/// Shared application state. Clone is required by Axum; `PgPool` is itself a
/// cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
