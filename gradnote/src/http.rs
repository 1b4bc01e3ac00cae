//! HTTP client policy shared by every API call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `HttpClient` owns the cross-cutting request rules: URL joining, bearer
//! injection from the token store, the per-request timeout and the global
//! 401 handler. The actual bytes move through a [`Transport`]: `gloo-net` in
//! the browser, `reqwest` in the CLI, an in-memory fake in tests.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the stored token and redirects to the login route before the
//! error is handed back, so every caller sees the same forced logout. Other
//! failures are returned untouched; nothing is retried.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, extract_message};
use crate::types::UploadFile;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outgoing request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Serialized JSON text.
    Json(String),
    /// A single file sent as multipart form data under `field`.
    Multipart { field: String, file: UploadFile },
}

/// A fully prepared request, ready for a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub timeout: Duration,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as seen by the policy layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `R`.
    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Moves one request over the wire.
///
/// Implementations must enforce `request.timeout` and report it, like any
/// other transport failure, as [`ApiError::Network`]. They return every HTTP
/// status as `Ok`; status handling belongs to [`HttpClient`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Persistent storage for the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Full-page navigation used by the 401 handler.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Token store kept in memory. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokens {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Format the `Authorization` header value for a stored token.
#[must_use]
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .filter(|t| !t.trim().is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// The configured API client.
pub struct HttpClient<T, S, N> {
    config: ClientConfig,
    transport: T,
    tokens: S,
    navigator: N,
}

impl<T, S, N> HttpClient<T, S, N>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    pub fn new(config: ClientConfig, transport: T, tokens: S, navigator: N) -> Self {
        Self { config, transport, tokens, navigator }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Prepare a request: join the URL and attach the standard headers.
    pub fn build_request(&self, method: Method, path: &str, body: RequestBody) -> HttpRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if matches!(body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(value) = bearer_header(self.tokens.load().as_deref()) {
            headers.push(("Authorization".to_owned(), value));
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
            timeout: self.config.timeout,
        }
    }

    /// Send a request and apply the status policy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport failure or timeout,
    /// [`ApiError::Unauthorized`] on 401 (after clearing the token and
    /// redirecting to the login route), and [`ApiError::Server`] on any other
    /// non-2xx status.
    pub async fn execute(&self, method: Method, path: &str, body: RequestBody) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body);
        log::debug!("{} {}", request.method, request.url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{method} {path} failed: {e}");
                return Err(e);
            }
        };

        if response.status == 401 {
            log::warn!("{method} {path} unauthorized; clearing session");
            self.tokens.clear();
            self.navigator.redirect(crate::LOGIN_ROUTE);
            return Err(ApiError::Unauthorized { message: extract_message(&response.body) });
        }
        if !response.is_success() {
            log::warn!("{method} {path} returned {}", response.status);
            return Err(ApiError::Server {
                status: response.status,
                message: extract_message(&response.body),
            });
        }
        Ok(response)
    }

    /// `GET` and decode.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`]; also [`ApiError::Decode`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Get, path, RequestBody::Empty).await?.json()
    }

    /// Send `body` as JSON with `method` and decode the answer.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`]; also [`ApiError::Encode`] / [`ApiError::Decode`].
    pub async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(method, path, RequestBody::Json(raw)).await?.json()
    }

    /// `POST` without a body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Post, path, RequestBody::Empty).await.map(|_| ())
    }

    /// `POST` without a body and decode the answer.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`]; also [`ApiError::Decode`].
    pub async fn post<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Post, path, RequestBody::Empty).await?.json()
    }

    /// `DELETE`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, RequestBody::Empty).await.map(|_| ())
    }

    /// `POST` one file as multipart form data (field `file`) and decode.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`]; also [`ApiError::Decode`].
    pub async fn post_multipart<R: DeserializeOwned>(&self, path: &str, file: UploadFile) -> Result<R, ApiError> {
        let body = RequestBody::Multipart { field: "file".to_owned(), file };
        self.execute(Method::Post, path, body).await?.json()
    }
}
