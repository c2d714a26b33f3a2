use super::*;
use time::macros::datetime;

// =============================================================
// Helpers
// =============================================================

fn make_record(id: &str) -> Record {
    Record {
        id: id.to_owned(),
        title: "Trip planning".to_owned(),
        content: serde_json::json!([
            {"role": "user", "content": "Where should we go?"},
            {"role": "assistant", "content": "Lisbon."}
        ]),
        created_at: datetime!(2023-01-05 14:07:09 UTC),
        updated_at: datetime!(2023-01-06 08:00:00 UTC),
    }
}

// =============================================================
// Share links
// =============================================================

#[test]
fn share_link_is_origin_slash_s_slash_id() {
    let record = make_record("rec-42");
    assert_eq!(record.share_link("https://chatkeep.dev"), "https://chatkeep.dev/s/rec-42");
}

#[test]
fn share_link_depends_only_on_origin_and_id() {
    let mut a = make_record("rec-7");
    let b = make_record("rec-7");
    a.title = "Renamed".to_owned();
    a.content = serde_json::json!([]);
    assert_eq!(a.share_link("http://localhost:3000"), b.share_link("http://localhost:3000"));
    assert_eq!(share_link("http://localhost:3000", "rec-7"), "http://localhost:3000/s/rec-7");
}

// =============================================================
// Story envelope
// =============================================================

#[test]
fn story_from_record_copies_fields_and_enables_share() {
    let record = make_record("rec-1");
    let story = Story::from_record(&record);
    assert_eq!(story.id, "rec-1");
    assert_eq!(story.kind, "chat");
    assert_eq!(story.title, "Trip planning");
    assert_eq!(story.messages, record.content);
    assert_eq!(story.timestamp, record.created_at);
    assert!(story.share);
}

#[test]
fn story_serializes_type_tag_and_rfc3339_timestamp() {
    let story = Story::from_record(&make_record("rec-1"));
    let value = serde_json::to_value(&story).unwrap();
    assert_eq!(value["type"], "chat");
    assert_eq!(value["timestamp"], "2023-01-05T14:07:09Z");
    assert_eq!(value["share"], true);
    assert!(value.get("kind").is_none());
}

#[test]
fn share_request_wraps_story_as_json_string() {
    let story = Story::from_record(&make_record("rec-9"));
    let request = ShareRequest::from_story(&story).unwrap();
    let decoded: Story = serde_json::from_str(&request.story).unwrap();
    assert_eq!(decoded, story);

    let body = serde_json::to_value(&request).unwrap();
    assert!(body["story"].is_string());
}

// =============================================================
// Record / response decoding
// =============================================================

#[test]
fn record_deserializes_server_payload() {
    let json = r#"{
        "id": "0b7c",
        "title": "Hello",
        "content": [],
        "created_at": "2023-01-05T14:07:09.000Z",
        "updated_at": "2023-01-05T14:07:09Z"
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, "0b7c");
    assert_eq!(record.created_at, datetime!(2023-01-05 14:07:09 UTC));
}

#[test]
fn success_response_defaults_to_false_when_missing() {
    let parsed: SuccessResponse = serde_json::from_str("{}").unwrap();
    assert!(!parsed.success);
    let parsed: SuccessResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(parsed.success);
}

#[test]
fn user_deserializes_without_optional_fields() {
    let json = r#"{"id": "u-1", "name": "alice", "email": null, "avatar_url": null, "auth_method": "email"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, None);
}

// =============================================================
// chat_messages
// =============================================================

#[test]
fn chat_messages_decodes_role_content_pairs() {
    let record = make_record("rec-1");
    let messages = chat_messages(&record.content);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, "assistant");
    assert_eq!(messages[1].content, "Lisbon.");
}

#[test]
fn chat_messages_skips_malformed_entries_and_non_arrays() {
    let value = serde_json::json!([{"role": "user"}, {"role": "user", "content": "hi"}, 3]);
    assert_eq!(chat_messages(&value).len(), 1);
    assert!(chat_messages(&serde_json::json!({"role": "user"})).is_empty());
}
