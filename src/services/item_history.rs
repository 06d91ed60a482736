//! Item-history service — the per-account set of items ever typed into a
//! list, powering autocomplete-style reuse.
//!
//! DESIGN
//! ======
//! A history record exists in one of two states per account: absent, or
//! present with zero or more items. `add_item` is the only absent→present
//! transition and runs as a single upsert against the UNIQUE owner index, so
//! concurrent first adds cannot create two records. `remove_item` never
//! changes the absent/present state; `delete_history` is present→absent.

use sqlx::PgPool;

use crate::record_id;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("no item history for account: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from item-history queries. `items` is semantically a set;
/// insertion order is preserved, membership is deduplicated.
#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub id: String,
    pub owner_account_id: String,
    pub items: Vec<String>,
}

type HistoryTuple = (String, String, Vec<String>);

fn to_row((id, owner_account_id, items): HistoryTuple) -> HistoryRow {
    HistoryRow { id, owner_account_id, items }
}

/// The items an account has ever used, or an empty set when no record exists.
/// Reading never creates a record.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_items(pool: &PgPool, owner_account_id: &str) -> Result<Vec<String>, HistoryError> {
    let items = sqlx::query_scalar::<_, Vec<String>>(
        "SELECT items FROM item_histories WHERE owner_account_id = $1",
    )
    .bind(owner_account_id)
    .fetch_optional(pool)
    .await?;

    Ok(items.unwrap_or_default())
}

/// Add an item to an account's history, creating the record on first use.
/// Adding an item already present leaves the set unchanged and still
/// succeeds.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn add_item(
    pool: &PgPool,
    owner_account_id: &str,
    item: &str,
) -> Result<HistoryRow, HistoryError> {
    // The fresh id is only consumed on the insert arm; an existing record
    // keeps its id.
    let row = sqlx::query_as::<_, HistoryTuple>(
        "INSERT INTO item_histories (id, owner_account_id, items)
         VALUES ($1, $2, ARRAY[$3::text])
         ON CONFLICT (owner_account_id) DO UPDATE
         SET items = CASE
             WHEN $3 = ANY(item_histories.items) THEN item_histories.items
             ELSE array_append(item_histories.items, $3)
         END
         RETURNING id, owner_account_id, items",
    )
    .bind(record_id::generate())
    .bind(owner_account_id)
    .bind(item)
    .fetch_one(pool)
    .await?;

    Ok(to_row(row))
}

/// Remove every occurrence of an item from an account's history. Removing an
/// item that is not present succeeds and returns the unchanged record.
///
/// # Errors
///
/// Returns `NotFound` if the account has no history record, or a database
/// error.
pub async fn remove_item(
    pool: &PgPool,
    owner_account_id: &str,
    item: &str,
) -> Result<HistoryRow, HistoryError> {
    let row = sqlx::query_as::<_, HistoryTuple>(
        "UPDATE item_histories
         SET items = array_remove(items, $2)
         WHERE owner_account_id = $1
         RETURNING id, owner_account_id, items",
    )
    .bind(owner_account_id)
    .bind(item)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| HistoryError::NotFound(owner_account_id.to_string()))?;

    Ok(to_row(row))
}

/// Delete an account's history record.
///
/// # Errors
///
/// Returns `NotFound` if the account has no history record, or a database
/// error.
pub async fn delete_history(pool: &PgPool, owner_account_id: &str) -> Result<(), HistoryError> {
    let result = sqlx::query("DELETE FROM item_histories WHERE owner_account_id = $1")
        .bind(owner_account_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(HistoryError::NotFound(owner_account_id.to_string()));
    }

    Ok(())
}

#[cfg(test)]
#[path = "item_history_test.rs"]
mod tests;
