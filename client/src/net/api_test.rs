use super::*;

#[test]
fn record_endpoint_formats_expected_path() {
    assert_eq!(record_endpoint("rec-1"), "/api/record/rec-1");
}

#[test]
fn share_endpoint_formats_expected_path() {
    assert_eq!(share_endpoint("rec-1"), "/api/share/rec-1");
}

#[test]
fn records_failed_message_formats_status() {
    assert_eq!(records_failed_message(401), "record request failed: 401");
}

#[test]
fn sign_in_failed_message_formats_status() {
    assert_eq!(sign_in_failed_message(429), "sign-in request failed: 429");
}

#[test]
fn api_reply_ok_covers_2xx_only() {
    assert!(ApiReply { status: 200, success: true }.ok());
    assert!(ApiReply { status: 204, success: false }.ok());
    assert!(!ApiReply { status: 199, success: false }.ok());
    assert!(!ApiReply { status: 300, success: false }.ok());
    assert!(!ApiReply { status: 409, success: false }.ok());
}

#[test]
fn api_reply_conflict_is_409() {
    assert!(ApiReply { status: 409, success: false }.is_conflict());
    assert!(!ApiReply { status: 400, success: false }.is_conflict());
}

#[test]
fn http_records_api_is_unavailable_off_browser() {
    let api = HttpRecordsApi;
    let result = futures::executor::block_on(api.delete_record("rec-1"));
    assert!(result.is_err());
}
