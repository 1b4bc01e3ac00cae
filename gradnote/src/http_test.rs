use super::*;
use crate::test_support::{harness, harness_with_token};
use futures::executor::block_on;

// =============================================================
// Bearer injection
// =============================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(Some("T")), Some("Bearer T".to_owned()));
    assert_eq!(bearer_header(Some("  ")), None);
    assert_eq!(bearer_header(None), None);
}

#[test]
fn request_without_token_has_no_authorization_header() {
    let h = harness();
    let request = h.client.build_request(Method::Get, "/api/v1/auth/me", RequestBody::Empty);
    assert_eq!(request.header("authorization"), None);
    assert_eq!(request.url, "/api/v1/auth/me");
}

#[test]
fn request_with_token_carries_bearer_header() {
    let h = harness_with_token("T");
    h.transport.respond_json(200, serde_json::json!({}));
    let _: serde_json::Value = block_on(h.client.get("/api/v1/auth/me")).unwrap();
    let sent = h.transport.last_request();
    assert_eq!(sent.header("Authorization"), Some("Bearer T"));
    assert_eq!(sent.method, Method::Get);
}

#[test]
fn json_body_sets_content_type_and_timeout() {
    let h = harness();
    h.transport.respond_json(200, serde_json::json!({ "ok": true }));
    let _: serde_json::Value =
        block_on(h.client.send_json(Method::Post, "/x", &serde_json::json!({ "a": 1 }))).unwrap();
    let sent = h.transport.last_request();
    assert_eq!(sent.header("content-type"), Some("application/json"));
    assert_eq!(sent.body, RequestBody::Json("{\"a\":1}".to_owned()));
    assert_eq!(sent.timeout, h.client.config().timeout);
}

#[test]
fn multipart_body_uses_file_field() {
    let h = harness();
    h.transport.respond_json(200, serde_json::json!({ "image_url": "u", "text": "t" }));
    let file = UploadFile {
        file_name: "q.png".to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![1, 2, 3],
    };
    let _: serde_json::Value = block_on(h.client.post_multipart("/up", file.clone())).unwrap();
    let sent = h.transport.last_request();
    assert_eq!(sent.body, RequestBody::Multipart { field: "file".to_owned(), file });
    assert_eq!(sent.header("content-type"), None);
}

// =============================================================
// Status policy
// =============================================================

#[test]
fn unauthorized_clears_token_and_redirects_to_login() {
    let h = harness_with_token("stale");
    h.transport.respond_json(401, serde_json::json!({ "detail": "Could not validate credentials" }));
    let err = block_on(h.client.get::<serde_json::Value>("/api/v1/questions/")).unwrap_err();

    assert_eq!(
        err,
        ApiError::Unauthorized { message: Some("Could not validate credentials".to_owned()) }
    );
    assert_eq!(h.tokens.load(), None);
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn server_error_keeps_token_and_extracts_message() {
    let h = harness_with_token("good");
    h.transport.respond_json(404, serde_json::json!({ "detail": "找不到该错题" }));
    let err = block_on(h.client.get::<serde_json::Value>("/api/v1/questions/9")).unwrap_err();

    assert_eq!(err, ApiError::Server { status: 404, message: Some("找不到该错题".to_owned()) });
    assert_eq!(h.tokens.load().as_deref(), Some("good"));
    assert!(h.navigator.visits().is_empty());
}

#[test]
fn transport_failure_is_network_error() {
    let h = harness();
    h.transport.fail("timed out after 10000ms");
    let err = block_on(h.client.delete("/api/v1/questions/1")).unwrap_err();
    assert_eq!(err, ApiError::Network("timed out after 10000ms".to_owned()));
}

#[test]
fn success_body_that_does_not_match_is_decode_error() {
    let h = harness();
    h.transport.respond_json(200, serde_json::json!({ "unexpected": true }));
    let err = block_on(h.client.get::<crate::types::User>("/api/v1/auth/me")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn post_empty_ignores_body() {
    let h = harness();
    h.transport.respond_empty(204);
    block_on(h.client.post_empty("/api/v1/auth/logout")).unwrap();
    assert_eq!(h.transport.last_request().body, RequestBody::Empty);
}

// =============================================================
// MemoryTokens
// =============================================================

#[test]
fn memory_tokens_clones_share_slot() {
    let a = MemoryTokens::default();
    let b = a.clone();
    a.save("x");
    assert_eq!(b.load().as_deref(), Some("x"));
    b.clear();
    assert_eq!(a.load(), None);
}
