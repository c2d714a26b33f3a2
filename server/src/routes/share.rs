//! Share routes. Creation requires a session; reading is public.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::records::SuccessResponse;
use crate::services::share::{self, ShareError, StoryEnvelope};
use crate::state::AppState;

/// The story arrives JSON-encoded inside a string field.
#[derive(Deserialize)]
pub struct CreateShareBody {
    pub story: String,
}

pub(crate) fn share_error_to_status(err: ShareError) -> StatusCode {
    match err {
        ShareError::InvalidStory(_) => StatusCode::BAD_REQUEST,
        ShareError::Conflict(_) => StatusCode::CONFLICT,
        ShareError::NotFound => StatusCode::NOT_FOUND,
        ShareError::Database(e) => {
            tracing::error!(error = %e, "share query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `POST /api/share` — publish a record. 409 when it is already shared.
pub async fn create_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateShareBody>,
) -> Result<Json<SuccessResponse>, StatusCode> {
    let story = share::parse_story(&body.story).map_err(|e| {
        tracing::warn!(error = %e, "rejected share request");
        share_error_to_status(e)
    })?;
    share::create_share(&state.pool, auth.user.id, &story)
        .await
        .map_err(share_error_to_status)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// `GET /api/share/{id}` — public snapshot.
pub async fn get_share(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<StoryEnvelope>, StatusCode> {
    let share_id = Uuid::parse_str(id.trim()).map_err(|_| StatusCode::NOT_FOUND)?;
    let story = share::get_share(&state.pool, share_id)
        .await
        .map_err(share_error_to_status)?;
    Ok(Json(story))
}

#[cfg(test)]
#[path = "share_test.rs"]
mod tests;
