//! Browser implementations of the core client's platform traits.
//!
//! Browser build (`csr`): real requests via `gloo-net`, the token in
//! `localStorage`, redirects through `window.location`.
//! Native build (tests): the transport fails every request, storage is empty
//! and redirects are dropped.
//!
//! ERROR HANDLING
//! ==============
//! The transport never panics. Fetch failures and the request timeout both
//! surface as `ApiError::Network`; HTTP statuses are passed through for the
//! core client to interpret.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use gradnote::config::{BASE_URL_VAR, TIMEOUT_VAR};
use gradnote::http::{HttpRequest, HttpResponse};
use gradnote::{ApiError, ClientConfig, HttpClient, Navigator, TOKEN_STORAGE_KEY, TokenStore, Transport};

use super::storage;

/// The client every page uses.
pub type ApiClient = HttpClient<BrowserTransport, LocalStorageTokens, BrowserNavigator>;

/// Build the API client from compile-time configuration.
pub fn api_client() -> ApiClient {
    HttpClient::new(build_config(), BrowserTransport, LocalStorageTokens, BrowserNavigator)
}

/// `GRADNOTE_API_URL` / `GRADNOTE_TIMEOUT_MS` as seen by the compiler.
pub fn build_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| {
        let value = if key == BASE_URL_VAR {
            option_env!("GRADNOTE_API_URL")
        } else if key == TIMEOUT_VAR {
            option_env!("GRADNOTE_TIMEOUT_MS")
        } else {
            None
        };
        value.map(str::to_owned)
    })
}

/// Fetch-based transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use futures::FutureExt;

            let timeout = request.timeout;
            let call = fetch(request).fuse();
            let deadline = gloo_timers::future::sleep(timeout).fuse();
            futures::pin_mut!(call, deadline);
            futures::select! {
                result = call => result,
                () = deadline => Err(timeout_error(timeout)),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn timeout_error(timeout: std::time::Duration) -> ApiError {
    ApiError::Network(format!("request timed out after {} ms", timeout.as_millis()))
}

#[cfg(feature = "csr")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    use gloo_net::http::{Method as FetchMethod, RequestBuilder};
    use gradnote::http::{Method, RequestBody};

    let method = match request.method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
        Method::Delete => FetchMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(text) => builder.body(text),
        RequestBody::Multipart { field, file } => builder.body(form_data(&field, &file)?),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .binary()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "csr")]
fn form_data(field: &str, file: &gradnote::types::UploadFile) -> Result<web_sys::FormData, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(field, &blob, &file.file_name)
        .map_err(js_error)?;
    Ok(form)
}

/// Bearer token kept in `localStorage` under `token`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        storage::read(TOKEN_STORAGE_KEY).filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        storage::write(TOKEN_STORAGE_KEY, token);
    }

    fn clear(&self) {
        storage::remove(TOKEN_STORAGE_KEY);
    }
}

/// Full-page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            if already_at(location.pathname().ok().as_deref(), path) {
                return;
            }
            let _ = location.set_href(path);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// A 401 on the login page itself (bad credentials) must not reload it.
#[cfg(any(test, feature = "csr"))]
fn already_at(current: Option<&str>, target: &str) -> bool {
    current.is_some_and(|current| current.trim_end_matches('/') == target.trim_end_matches('/'))
}

/// Read a picked file into an [`UploadFile`].
///
/// # Errors
///
/// Returns a message when the browser cannot read the file.
pub async fn read_file(file: &FileHandle) -> Result<gradnote::types::UploadFile, String> {
    #[cfg(feature = "csr")]
    {
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| format!("could not read file: {e:?}"))?;
        Ok(gradnote::types::UploadFile {
            file_name: file.name(),
            content_type: file.type_(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = file;
        Err("not available outside the browser".to_owned())
    }
}

/// A file picked in an `<input type="file">`.
#[cfg(feature = "csr")]
pub type FileHandle = web_sys::File;

/// Stand-in for `web_sys::File` in native builds.
#[cfg(not(feature = "csr"))]
#[derive(Clone, Debug, Default)]
pub struct FileHandle;
