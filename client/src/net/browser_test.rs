#![cfg(not(feature = "csr"))]

use super::*;
use futures::executor::block_on;
use gradnote::http::{Method, RequestBody};
use std::time::Duration;

#[test]
fn already_at_ignores_trailing_slash() {
    assert!(already_at(Some("/login"), "/login"));
    assert!(already_at(Some("/login/"), "/login"));
    assert!(!already_at(Some("/questions/new"), "/login"));
    assert!(!already_at(None, "/login"));
}

#[test]
fn timeout_is_reported_as_network_error() {
    assert_eq!(
        timeout_error(Duration::from_millis(10_000)),
        ApiError::Network("request timed out after 10000 ms".to_owned())
    );
}

#[test]
fn build_config_defaults_to_same_origin() {
    let config = build_config();
    if option_env!("GRADNOTE_API_URL").is_none() {
        assert_eq!(config.url("/api/v1/auth/me"), "/api/v1/auth/me");
    }
}

#[test]
fn native_transport_fails_without_panicking() {
    let request = HttpRequest {
        method: Method::Get,
        url: "/api/v1/auth/me".to_owned(),
        headers: Vec::new(),
        body: RequestBody::Empty,
        timeout: Duration::from_secs(1),
    };
    let result = block_on(BrowserTransport.send(request));
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[test]
fn native_token_store_is_empty() {
    let tokens = LocalStorageTokens;
    tokens.save("abc");
    assert_eq!(tokens.load(), None);
    tokens.clear();
    BrowserNavigator.redirect("/login");
}
