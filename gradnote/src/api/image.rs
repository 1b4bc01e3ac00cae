//! `/api/v1/image` endpoints.

use crate::error::ApiError;
use crate::http::{HttpClient, Navigator, TokenStore, Transport};
use crate::types::{ImageProcessResult, UploadFile};

pub const PROCESS_PATH: &str = "/api/v1/image/process";

/// Upload an image and run OCR on it.
///
/// # Errors
///
/// Any [`ApiError`]; the server answers 400 for non-image uploads and 500
/// when recognition fails.
pub async fn process_image<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    file: UploadFile,
) -> Result<ImageProcessResult, ApiError> {
    client.post_multipart(PROCESS_PATH, file).await
}
