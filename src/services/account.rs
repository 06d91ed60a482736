//! Account service — registration, login, profile edit, cascade deletion.
//!
//! DESIGN
//! ======
//! Email uniqueness lives in the store (UNIQUE index) and registration is a
//! single conditional insert, so two concurrent registrations with the same
//! email cannot both win. Account deletion runs as one transaction covering
//! the account row, its lists, and its item history; a failed cascade rolls
//! back rather than leaving orphan rows behind a reported success.

use sqlx::PgPool;

use crate::record_id;
use crate::services::password;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account not found")]
    NotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error("password mismatch")]
    WrongPassword,
    #[error("old password missing")]
    MissingPassword,
    #[error("old password mismatch")]
    WrongOldPassword,
    #[error("hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from account queries. `password_hash` is the stored bcrypt
/// digest.
#[derive(Debug, Clone)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields of a profile edit. Absent fields keep their stored value; a present
/// password is re-hashed before it is written.
#[derive(Debug, Default)]
pub struct ProfileChanges<'a> {
    pub old_password: Option<&'a str>,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
}

/// What a cascade delete removed alongside the account row.
#[derive(Debug, Clone, Copy)]
pub struct CascadeOutcome {
    pub deleted_lists: u64,
    pub deleted_histories: u64,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Register a new account.
///
/// # Errors
///
/// Returns `EmailTaken` if an account with the email already exists, `Hash`
/// if the password cannot be digested, or a database error.
pub async fn register(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AccountRow, AccountError> {
    let id = record_id::generate();
    let password_hash = password::hash(password)?;

    let result = sqlx::query(
        "INSERT INTO accounts (id, name, email, password_hash)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(&id)
    .bind(name)
    .bind(email)
    .bind(&password_hash)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AccountError::EmailTaken);
    }

    Ok(AccountRow { id, name: name.to_string(), email: email.to_string(), password_hash })
}

/// Authenticate by email and password, returning the account row.
///
/// # Errors
///
/// Returns `NotFound` if no account matches the email, `WrongPassword` if the
/// password does not verify, or a database error.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<AccountRow, AccountError> {
    let account = fetch_by_email(pool, email).await?.ok_or(AccountError::NotFound)?;

    if !password::verify(password, &account.password_hash)? {
        return Err(AccountError::WrongPassword);
    }

    Ok(account)
}

/// Apply a profile edit after re-authenticating with the old password.
///
/// # Errors
///
/// Returns `NotFound` if the account does not exist, `MissingPassword` /
/// `WrongOldPassword` on credential failure, `EmailTaken` if the new email is
/// already registered, or a database error.
pub async fn update_profile(
    pool: &PgPool,
    account_id: &str,
    changes: &ProfileChanges<'_>,
) -> Result<AccountRow, AccountError> {
    let account = fetch_by_id(pool, account_id).await?.ok_or(AccountError::NotFound)?;

    let old_password = changes.old_password.ok_or(AccountError::MissingPassword)?;
    if !password::verify(old_password, &account.password_hash)? {
        return Err(AccountError::WrongOldPassword);
    }

    let new_hash = changes.password.map(password::hash).transpose()?;

    let row = sqlx::query_as::<_, (String, String, String, String)>(
        "UPDATE accounts
         SET name = COALESCE($2, name),
             email = COALESCE($3, email),
             password_hash = COALESCE($4, password_hash)
         WHERE id = $1
         RETURNING id, name, email, password_hash",
    )
    .bind(account_id)
    .bind(changes.name)
    .bind(changes.email)
    .bind(new_hash)
    .fetch_optional(pool)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AccountError::EmailTaken,
        other => AccountError::Database(other),
    })?
    .ok_or(AccountError::NotFound)?;

    Ok(AccountRow { id: row.0, name: row.1, email: row.2, password_hash: row.3 })
}

/// Delete an account together with every list and the item history it owns.
/// The three deletes share one transaction.
///
/// # Errors
///
/// Returns `NotFound` if the account does not exist, or a database error (in
/// which case nothing was deleted).
pub async fn delete_account(pool: &PgPool, account_id: &str) -> Result<CascadeOutcome, AccountError> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(account_id)
        .execute(&mut *tx)
        .await?;
    if deleted.rows_affected() == 0 {
        return Err(AccountError::NotFound);
    }

    let lists = sqlx::query("DELETE FROM lists WHERE owner_account_id = $1")
        .bind(account_id)
        .execute(&mut *tx)
        .await?;

    let histories = sqlx::query("DELETE FROM item_histories WHERE owner_account_id = $1")
        .bind(account_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(CascadeOutcome {
        deleted_lists: lists.rows_affected(),
        deleted_histories: histories.rows_affected(),
    })
}

// =============================================================================
// LOOKUPS
// =============================================================================

async fn fetch_by_email(pool: &PgPool, email: &str) -> Result<Option<AccountRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, (String, String, String, String)>(
        "SELECT id, name, email, password_hash FROM accounts WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(id, name, email, password_hash)| AccountRow { id, name, email, password_hash }))
}

async fn fetch_by_id(pool: &PgPool, account_id: &str) -> Result<Option<AccountRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, (String, String, String, String)>(
        "SELECT id, name, email, password_hash FROM accounts WHERE id = $1",
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(id, name, email, password_hash)| AccountRow { id, name, email, password_hash }))
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
