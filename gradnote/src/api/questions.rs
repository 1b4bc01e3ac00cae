//! `/api/v1/questions` endpoints.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use crate::error::ApiError;
use crate::http::{HttpClient, Method, Navigator, TokenStore, Transport};
use crate::types::{Envelope, Question, QuestionDraft, QuestionPage, UploadFile};

pub const QUESTIONS_PATH: &str = "/api/v1/questions/";
pub const FROM_IMAGE_PATH: &str = "/api/v1/questions/from-image";

/// Page size the list screens request by default.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn list_path(skip: u32, limit: u32) -> String {
    format!("{QUESTIONS_PATH}?skip={skip}&limit={limit}")
}

fn item_path(id: i64) -> String {
    format!("{QUESTIONS_PATH}{id}")
}

/// List the current user's questions.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn list_questions<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    skip: u32,
    limit: u32,
) -> Result<QuestionPage, ApiError> {
    client.get(&list_path(skip, limit)).await
}

/// Fetch one question.
///
/// # Errors
///
/// Any [`ApiError`]; unknown or foreign ids arrive as `Server { status: 404 }`.
pub async fn get_question<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    id: i64,
) -> Result<Question, ApiError> {
    client.get::<Envelope<Question>>(&item_path(id)).await.map(Envelope::into_inner)
}

/// Create a question from a draft.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn create_question<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    draft: &QuestionDraft,
) -> Result<Question, ApiError> {
    client
        .send_json::<_, Envelope<Question>>(Method::Post, QUESTIONS_PATH, draft)
        .await
        .map(Envelope::into_inner)
}

/// Replace the fields set in `draft`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn update_question<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    id: i64,
    draft: &QuestionDraft,
) -> Result<Question, ApiError> {
    client
        .send_json::<_, Envelope<Question>>(Method::Put, &item_path(id), draft)
        .await
        .map(Envelope::into_inner)
}

/// Delete a question.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn delete_question<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    id: i64,
) -> Result<(), ApiError> {
    client.delete(&item_path(id)).await
}

/// Upload an image and let the server create the question from its OCR text.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn create_from_image<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    file: UploadFile,
) -> Result<Question, ApiError> {
    client
        .post_multipart::<Envelope<Question>>(FROM_IMAGE_PATH, file)
        .await
        .map(Envelope::into_inner)
}
