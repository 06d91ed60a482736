//! List service — CRUD over named shopping lists scoped to one account.

use sqlx::PgPool;

use crate::record_id;

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("list not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from list queries. `items` is an ordered sequence; duplicates
/// are permitted.
#[derive(Debug, Clone)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub items: Vec<String>,
    pub owner_account_id: String,
    pub last_modified_at_ms: i64,
}

type ListTuple = (String, String, Vec<String>, String, i64);

fn to_row((id, title, items, owner_account_id, last_modified_at_ms): ListTuple) -> ListRow {
    ListRow { id, title, items, owner_account_id, last_modified_at_ms }
}

fn now_epoch_ms() -> i64 {
    let Ok(duration) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}

/// Create a new list owned by `owner_account_id`.
///
/// The owner id is stored as given; whether it references a live account is
/// the caller's responsibility.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_list(
    pool: &PgPool,
    title: &str,
    items: &[String],
    owner_account_id: &str,
) -> Result<ListRow, ListError> {
    let id = record_id::generate();
    let last_modified_at_ms = now_epoch_ms();

    sqlx::query(
        "INSERT INTO lists (id, title, items, owner_account_id, last_modified_at_ms)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&id)
    .bind(title)
    .bind(items)
    .bind(owner_account_id)
    .bind(last_modified_at_ms)
    .execute(pool)
    .await?;

    Ok(ListRow {
        id,
        title: title.to_string(),
        items: items.to_vec(),
        owner_account_id: owner_account_id.to_string(),
        last_modified_at_ms,
    })
}

/// All lists owned by one account, newest-modified first. An account with no
/// lists yields an empty vector, not an error.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_by_owner(pool: &PgPool, owner_account_id: &str) -> Result<Vec<ListRow>, ListError> {
    let rows = sqlx::query_as::<_, ListTuple>(
        "SELECT id, title, items, owner_account_id, last_modified_at_ms
         FROM lists
         WHERE owner_account_id = $1
         ORDER BY last_modified_at_ms DESC, id ASC",
    )
    .bind(owner_account_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(to_row).collect())
}

/// Every list in the store, newest-modified first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<ListRow>, ListError> {
    let rows = sqlx::query_as::<_, ListTuple>(
        "SELECT id, title, items, owner_account_id, last_modified_at_ms
         FROM lists
         ORDER BY last_modified_at_ms DESC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(to_row).collect())
}

/// Overwrite a list's title and items, refreshing its modification time.
///
/// # Errors
///
/// Returns `NotFound` if no list has that id, or a database error.
pub async fn update_list(
    pool: &PgPool,
    list_id: &str,
    title: &str,
    items: &[String],
) -> Result<ListRow, ListError> {
    let row = sqlx::query_as::<_, ListTuple>(
        "UPDATE lists
         SET title = $2, items = $3, last_modified_at_ms = $4
         WHERE id = $1
         RETURNING id, title, items, owner_account_id, last_modified_at_ms",
    )
    .bind(list_id)
    .bind(title)
    .bind(items)
    .bind(now_epoch_ms())
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| ListError::NotFound(list_id.to_string()))?;

    Ok(to_row(row))
}

/// Delete a list by id.
///
/// # Errors
///
/// Returns `NotFound` if no list has that id, or a database error.
pub async fn delete_list(pool: &PgPool, list_id: &str) -> Result<(), ListError> {
    let result = sqlx::query("DELETE FROM lists WHERE id = $1")
        .bind(list_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ListError::NotFound(list_id.to_string()));
    }

    Ok(())
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
