//! Share service — public snapshots of records.
//!
//! DESIGN
//! ======
//! The client posts the story as a JSON *string* (`{"story": "..."}`). The
//! share id mirrors the record id, and the primary key on `shares.id` makes
//! creation idempotent: a second insert affects zero rows and is reported as
//! [`ShareError::Conflict`] so the caller can answer 409.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::record;

/// The only story type records produce.
pub const STORY_KIND_CHAT: &str = "chat";

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("invalid story: {0}")]
    InvalidStory(String),
    #[error("share already exists: {0}")]
    Conflict(Uuid),
    #[error("not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<record::RecordError> for ShareError {
    fn from(err: record::RecordError) -> Self {
        match err {
            record::RecordError::Database(e) => Self::Database(e),
            record::RecordError::NotFound | record::RecordError::InvalidContent => Self::NotFound,
        }
    }
}

/// Story snapshot, as posted by the client and served back publicly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEnvelope {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub messages: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub share: bool,
}

/// Decode and validate the JSON-encoded story from a share request.
///
/// # Errors
///
/// Returns [`ShareError::InvalidStory`] for malformed JSON, an unknown story
/// type, non-array messages, or `share: false`.
pub fn parse_story(raw: &str) -> Result<StoryEnvelope, ShareError> {
    let story: StoryEnvelope = serde_json::from_str(raw).map_err(|e| ShareError::InvalidStory(e.to_string()))?;
    if story.kind != STORY_KIND_CHAT {
        return Err(ShareError::InvalidStory(format!("unsupported type {:?}", story.kind)));
    }
    if !story.messages.is_array() {
        return Err(ShareError::InvalidStory("messages must be an array".into()));
    }
    if !story.share {
        return Err(ShareError::InvalidStory("share flag must be true".into()));
    }
    Ok(story)
}

/// Create the share for a record owned by `user_id`.
///
/// # Errors
///
/// - [`ShareError::NotFound`] if the record is missing or not owned.
/// - [`ShareError::Conflict`] if a share for this record already exists.
pub async fn create_share(pool: &PgPool, user_id: Uuid, story: &StoryEnvelope) -> Result<(), ShareError> {
    if !record::record_owned_by(pool, user_id, story.id).await? {
        return Err(ShareError::NotFound);
    }

    let result = sqlx::query(
        "INSERT INTO shares (id, user_id, kind, title, messages, timestamp, share)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(story.id)
    .bind(user_id)
    .bind(&story.kind)
    .bind(&story.title)
    .bind(&story.messages)
    .bind(story.timestamp)
    .bind(story.share)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ShareError::Conflict(story.id));
    }
    tracing::info!(share_id = %story.id, %user_id, "share created");
    Ok(())
}

/// Load a public share.
///
/// # Errors
///
/// Returns [`ShareError::NotFound`] if no enabled share has this id.
pub async fn get_share(pool: &PgPool, share_id: Uuid) -> Result<StoryEnvelope, ShareError> {
    let row = sqlx::query_as::<_, (Uuid, String, String, serde_json::Value, OffsetDateTime, bool)>(
        "SELECT id, kind, title, messages, timestamp, share
         FROM shares
         WHERE id = $1 AND share",
    )
    .bind(share_id)
    .fetch_optional(pool)
    .await?;

    row.map(|(id, kind, title, messages, timestamp, share)| StoryEnvelope { id, kind, title, messages, timestamp, share })
        .ok_or(ShareError::NotFound)
}

#[cfg(test)]
#[path = "share_test.rs"]
mod tests;
