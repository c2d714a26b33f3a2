//! Record service — CRUD for saved chat transcripts.
//!
//! Every query is scoped by `user_id`: a record owned by someone else is
//! indistinguishable from a missing one.

use serde::Serialize;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

/// Title used when a transcript is saved without one.
pub const DEFAULT_TITLE: &str = "Untitled Chat";
const MAX_TITLE_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record not found")]
    NotFound,
    #[error("record content must be a JSON array of messages")]
    InvalidContent,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRow {
    pub id: Uuid,
    pub title: String,
    pub content: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

type RecordTuple = (Uuid, String, serde_json::Value, OffsetDateTime, OffsetDateTime);

fn from_tuple((id, title, content, created_at, updated_at): RecordTuple) -> RecordRow {
    RecordRow { id, title, content, created_at, updated_at }
}

/// Trim and bound a title, falling back to [`DEFAULT_TITLE`].
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return DEFAULT_TITLE.to_owned();
    }
    trimmed.chars().take(MAX_TITLE_CHARS).collect()
}

/// Parse a path id. Malformed ids are reported as not found.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] when `raw` is not a UUID.
pub fn parse_record_id(raw: &str) -> Result<Uuid, RecordError> {
    Uuid::parse_str(raw.trim()).map_err(|_| RecordError::NotFound)
}

/// List a user's records, most recently updated first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_records(pool: &PgPool, user_id: Uuid) -> Result<Vec<RecordRow>, RecordError> {
    let rows = sqlx::query_as::<_, RecordTuple>(
        "SELECT id, title, content, created_at, updated_at
         FROM records
         WHERE user_id = $1
         ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(from_tuple).collect())
}

/// Fetch one record owned by `user_id`.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if it does not exist or is not owned.
pub async fn get_record(pool: &PgPool, user_id: Uuid, record_id: Uuid) -> Result<RecordRow, RecordError> {
    let row = sqlx::query_as::<_, RecordTuple>(
        "SELECT id, title, content, created_at, updated_at
         FROM records
         WHERE id = $1 AND user_id = $2",
    )
    .bind(record_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(from_tuple).ok_or(RecordError::NotFound)
}

/// Save a transcript.
///
/// # Errors
///
/// Returns [`RecordError::InvalidContent`] if `content` is not an array, or a
/// database error.
pub async fn create_record(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    content: serde_json::Value,
) -> Result<RecordRow, RecordError> {
    if !content.is_array() {
        return Err(RecordError::InvalidContent);
    }
    let row = sqlx::query_as::<_, RecordTuple>(
        "INSERT INTO records (user_id, title, content)
         VALUES ($1, $2, $3)
         RETURNING id, title, content, created_at, updated_at",
    )
    .bind(user_id)
    .bind(normalize_title(title))
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(from_tuple(row))
}

/// Delete a record owned by `user_id`.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] when nothing was deleted.
pub async fn delete_record(pool: &PgPool, user_id: Uuid, record_id: Uuid) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM records WHERE id = $1 AND user_id = $2")
        .bind(record_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RecordError::NotFound);
    }
    Ok(())
}

/// Whether `user_id` owns `record_id`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn record_owned_by(pool: &PgPool, user_id: Uuid, record_id: Uuid) -> Result<bool, RecordError> {
    let owned = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM records WHERE id = $1 AND user_id = $2)")
        .bind(record_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(owned)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
