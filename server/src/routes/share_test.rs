use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers;

#[test]
fn share_error_to_status_maps_invalid_story() {
    let err = ShareError::InvalidStory("bad".into());
    assert_eq!(share_error_to_status(err), StatusCode::BAD_REQUEST);
}

#[test]
fn share_error_to_status_maps_conflict() {
    assert_eq!(share_error_to_status(ShareError::Conflict(Uuid::nil())), StatusCode::CONFLICT);
}

#[test]
fn share_error_to_status_maps_not_found() {
    assert_eq!(share_error_to_status(ShareError::NotFound), StatusCode::NOT_FOUND);
}

#[test]
fn create_body_keeps_story_as_string() {
    let body: CreateShareBody = serde_json::from_str(r#"{"story":"{\"id\":\"x\"}"}"#).unwrap();
    assert_eq!(body.story, r#"{"id":"x"}"#);
}

#[tokio::test]
async fn create_requires_session() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder()
        .method("POST")
        .uri("/api/share")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"story":"{}"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_with_malformed_id_is_not_found() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder().uri("/api/share/not-a-uuid").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
