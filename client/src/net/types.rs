//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON responses so serde round-trips stay
//! lossless. Timestamps travel as RFC 3339 strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Type tag carried by every share created from a record.
pub const STORY_KIND_CHAT: &str = "chat";

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address, when the account was created through a magic link.
    pub email: Option<String>,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// How the current session was established (`"github"`, `"email"`).
    pub auth_method: String,
}

/// A saved chat transcript owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Serialized message list, passed through untouched.
    pub content: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Record {
    /// Public link under which this record's share is served.
    ///
    /// Depends only on the origin and the record id, never on whether a share
    /// has been created yet.
    #[must_use]
    pub fn share_link(&self, origin: &str) -> String {
        share_link(origin, &self.id)
    }
}

/// Build `"<origin>/s/<id>"`.
#[must_use]
pub fn share_link(origin: &str, id: &str) -> String {
    format!("{origin}/s/{id}")
}

/// Share snapshot of a record. Sent JSON-encoded inside [`ShareRequest`] and
/// returned as-is by `GET /api/share/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub messages: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub share: bool,
}

impl Story {
    /// Snapshot a record for sharing.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            kind: STORY_KIND_CHAT.to_owned(),
            title: record.title.clone(),
            messages: record.content.clone(),
            timestamp: record.created_at,
            share: true,
        }
    }
}

/// Body of `POST /api/share`: the story travels as a JSON string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub story: String,
}

impl ShareRequest {
    /// Encode a story into the request envelope.
    ///
    /// # Errors
    ///
    /// Returns the serde error message if the story cannot be encoded.
    pub fn from_story(story: &Story) -> Result<Self, String> {
        serde_json::to_string(story)
            .map(|story| Self { story })
            .map_err(|e| e.to_string())
    }
}

/// `{ "success": bool }` acknowledgement used by record and share mutations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: bool,
}

/// Body of `POST /api/record`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub title: String,
    pub content: serde_json::Value,
}

/// One chat message inside a transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Decode a transcript value into chat messages, skipping entries that do not
/// have the `{role, content}` shape.
#[must_use]
pub fn chat_messages(value: &serde_json::Value) -> Vec<ChatMessage> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<ChatMessage>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
