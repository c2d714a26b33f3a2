use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers;

#[test]
fn record_error_to_status_maps_not_found() {
    assert_eq!(record_error_to_status(RecordError::NotFound), StatusCode::NOT_FOUND);
}

#[test]
fn record_error_to_status_maps_invalid_content() {
    assert_eq!(record_error_to_status(RecordError::InvalidContent), StatusCode::BAD_REQUEST);
}

#[test]
fn record_error_to_status_maps_database() {
    let err = RecordError::Database(sqlx::Error::RowNotFound);
    assert_eq!(record_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn create_body_title_defaults_to_empty() {
    let body: CreateRecordBody = serde_json::from_str(r#"{"content":[]}"#).unwrap();
    assert_eq!(body.title, "");
    assert!(body.content.is_array());
}

#[test]
fn success_response_serializes_flag() {
    let json = serde_json::to_value(SuccessResponse { success: true }).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn list_requires_session() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder().uri("/api/record").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_requires_session() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder()
        .method("POST")
        .uri("/api/record")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"t","content":[]}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_requires_session() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder()
        .method("DELETE")
        .uri("/api/record/00000000-0000-0000-0000-000000000000")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
