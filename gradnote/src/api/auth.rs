//! `/api/v1/auth` endpoints.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::http::{HttpClient, Method, Navigator, TokenStore, Transport};
use crate::types::{LoginRequest, LoginResponse, RegisterRequest, User};

pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const REGISTER_PATH: &str = "/api/v1/auth/register";
pub const LOGOUT_PATH: &str = "/api/v1/auth/logout";
pub const ME_PATH: &str = "/api/v1/auth/me";

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// Any [`ApiError`]; bad credentials usually arrive as `Unauthorized`.
pub async fn login<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    client.send_json(Method::Post, LOGIN_PATH, request).await
}

/// Create an account. The response shape is server-defined and returned raw.
///
/// # Errors
///
/// Any [`ApiError`]; duplicate usernames/emails arrive as `Server { status: 400 }`.
pub async fn register<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    request: &RegisterRequest,
) -> Result<serde_json::Value, ApiError> {
    client.send_json(Method::Post, REGISTER_PATH, request).await
}

/// End the server-side session.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn logout<T: Transport, S: TokenStore, N: Navigator>(client: &HttpClient<T, S, N>) -> Result<(), ApiError> {
    client.post_empty(LOGOUT_PATH).await
}

/// Fetch the profile behind the stored token.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn current_user<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
) -> Result<User, ApiError> {
    client.get(ME_PATH).await
}
