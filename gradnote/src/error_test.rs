use super::*;

#[test]
fn extract_message_prefers_message_field() {
    let body = br#"{"message": "bad password", "detail": "ignored"}"#;
    assert_eq!(extract_message(body).as_deref(), Some("bad password"));
}

#[test]
fn extract_message_reads_fastapi_detail_string() {
    let body = "{\"detail\": \"用户名或密码错误\"}".as_bytes();
    assert_eq!(extract_message(body).as_deref(), Some("用户名或密码错误"));
}

#[test]
fn extract_message_reads_first_validation_entry() {
    let body = br#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#;
    assert_eq!(extract_message(body).as_deref(), Some("field required"));
}

#[test]
fn extract_message_ignores_blank_and_non_json() {
    assert_eq!(extract_message(br#"{"message": "   "}"#), None);
    assert_eq!(extract_message(b"<html>502</html>"), None);
    assert_eq!(extract_message(b""), None);
}

#[test]
fn user_message_falls_back_without_server_text() {
    let err = ApiError::Network("timed out".to_owned());
    assert_eq!(err.user_message("try again"), "try again");

    let err = ApiError::Server { status: 400, message: Some("email taken".to_owned()) };
    assert_eq!(err.user_message("try again"), "email taken");
}

#[test]
fn status_reports_http_code() {
    assert_eq!(ApiError::Unauthorized { message: None }.status(), Some(401));
    assert_eq!(ApiError::Server { status: 404, message: None }.status(), Some(404));
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}
