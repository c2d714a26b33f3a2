//! Record routes — list, save, fetch and delete the caller's transcripts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::routes::auth::AuthUser;
use crate::services::record::{self, RecordError, RecordRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateRecordBody {
    #[serde(default)]
    pub title: String,
    pub content: serde_json::Value,
}

/// Acknowledgement body shared by record and share mutations.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

pub(crate) fn record_error_to_status(err: RecordError) -> StatusCode {
    match err {
        RecordError::NotFound => StatusCode::NOT_FOUND,
        RecordError::InvalidContent => StatusCode::BAD_REQUEST,
        RecordError::Database(e) => {
            tracing::error!(error = %e, "record query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/record` — the caller's records, newest first.
pub async fn list_records(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<RecordRow>>, StatusCode> {
    let rows = record::list_records(&state.pool, auth.user.id)
        .await
        .map_err(record_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/record` — save a transcript.
pub async fn create_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateRecordBody>,
) -> Result<(StatusCode, Json<RecordRow>), StatusCode> {
    let row = record::create_record(&state.pool, auth.user.id, &body.title, body.content)
        .await
        .map_err(record_error_to_status)?;
    tracing::info!(record_id = %row.id, user_id = %auth.user.id, "record saved");
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/record/{id}` — one record.
pub async fn get_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<RecordRow>, StatusCode> {
    let record_id = record::parse_record_id(&id).map_err(record_error_to_status)?;
    let row = record::get_record(&state.pool, auth.user.id, record_id)
        .await
        .map_err(record_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/record/{id}` — delete a record and, by cascade, its share.
pub async fn delete_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, StatusCode> {
    let record_id = record::parse_record_id(&id).map_err(record_error_to_status)?;
    record::delete_record(&state.pool, auth.user.id, record_id)
        .await
        .map_err(record_error_to_status)?;
    tracing::info!(%record_id, user_id = %auth.user.id, "record deleted");
    Ok(Json(SuccessResponse { success: true }))
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
