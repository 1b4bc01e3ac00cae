//! Client-side validation and the submit helpers built on it.
//!
//! Every helper validates first and only then issues its single API call, so
//! a rejected form or file never reaches the network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::api;
use crate::error::ApiError;
use crate::http::{HttpClient, Navigator, TokenStore, Transport};
use crate::types::{ImageProcessResult, Question, QuestionDraft, RegisterRequest, UploadFile};

/// Uploads must be strictly smaller than this.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const CONTENT_REQUIRED: &str = "Please enter the question content.";
pub const EMAIL_REQUIRED: &str = "Please enter your email.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Please enter your password.";
pub const USERNAME_REQUIRED: &str = "Please enter a username.";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password.";
pub const PASSWORD_MISMATCH: &str = "The two passwords do not match.";

pub const NOT_AN_IMAGE: &str = "Only image files can be uploaded.";
pub const IMAGE_TOO_LARGE: &str = "Images must be smaller than 5MB.";

/// Why a picked file was refused before upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("{}", NOT_AN_IMAGE)]
    NotAnImage,
    #[error("{}", IMAGE_TOO_LARGE)]
    TooLarge,
}

impl UploadRejection {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotAnImage => NOT_AN_IMAGE,
            Self::TooLarge => IMAGE_TOO_LARGE,
        }
    }
}

/// Failure of a validate-then-call helper.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Rejected locally; nothing was sent.
    #[error("{0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Check a picked file's MIME type and size.
///
/// # Errors
///
/// [`UploadRejection::NotAnImage`] unless the type starts with `image/`;
/// [`UploadRejection::TooLarge`] at 5 MiB or more.
pub fn validate_image(content_type: &str, size_bytes: u64) -> Result<(), UploadRejection> {
    if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(UploadRejection::NotAnImage);
    }
    if size_bytes >= MAX_IMAGE_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(())
}

/// Loose address check: one `@`, something before it, a dotted domain after.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Trim and require both login fields.
///
/// # Errors
///
/// The message to show under the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Raw register form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate the register form and build the request body.
///
/// # Errors
///
/// The first failing field's message.
pub fn validate_register_input(input: &RegisterInput) -> Result<RegisterRequest, &'static str> {
    let username = input.username.trim();
    if username.is_empty() {
        return Err(USERNAME_REQUIRED);
    }
    let email = input.email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !looks_like_email(email) {
        return Err(EMAIL_INVALID);
    }
    if input.password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if input.confirm_password.is_empty() {
        return Err(CONFIRM_REQUIRED);
    }
    if input.password != input.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: input.password.clone(),
    })
}

/// Build a create-question draft from the submit form.
///
/// Blank remarks and image URLs are left out.
///
/// # Errors
///
/// [`CONTENT_REQUIRED`] when the content is blank.
pub fn build_question_draft(content: &str, remarks: &str, image_url: Option<&str>) -> Result<QuestionDraft, &'static str> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CONTENT_REQUIRED);
    }
    let non_blank = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    };
    Ok(QuestionDraft {
        content: Some(content.to_owned()),
        remarks: non_blank(remarks),
        image_url: image_url.and_then(non_blank),
        ..QuestionDraft::default()
    })
}

/// Validate the question form and create it with one API call.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any network call, or the API failure.
pub async fn submit_question<T, S, N>(
    client: &HttpClient<T, S, N>,
    content: &str,
    remarks: &str,
    image_url: Option<&str>,
) -> Result<Question, SubmitError>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    let draft = build_question_draft(content, remarks, image_url).map_err(SubmitError::Invalid)?;
    let question = api::questions::create_question(client, &draft).await?;
    log::info!("created question {}", question.id);
    Ok(question)
}

/// Validate a picked image and send it for OCR.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any network call, or the API failure.
pub async fn upload_image<T, S, N>(client: &HttpClient<T, S, N>, file: UploadFile) -> Result<ImageProcessResult, SubmitError>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    if let Err(rejection) = validate_image(&file.content_type, file.size()) {
        log::info!("rejected upload {}: {rejection}", file.file_name);
        return Err(SubmitError::Invalid(rejection.message()));
    }
    Ok(api::image::process_image(client, file).await?)
}

/// Validate the register form and create the account.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any network call, or the API failure.
pub async fn register_account<T, S, N>(
    client: &HttpClient<T, S, N>,
    input: &RegisterInput,
) -> Result<serde_json::Value, SubmitError>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    let request = validate_register_input(input).map_err(SubmitError::Invalid)?;
    Ok(api::auth::register(client, &request).await?)
}
