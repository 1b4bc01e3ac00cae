//! Wire DTOs for the GradNote REST API.
//!
//! DESIGN
//! ======
//! The server is not strict about envelopes: question endpoints may answer
//! `{ "data": ... }` or the bare value, and several optional strings arrive as
//! `null`. Decoding is tolerant here so the wrappers and UI never have to care.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/api/v1/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    /// Display/login name.
    pub username: String,
    /// Email address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Account creation timestamp (ISO 8601), if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token. The server may name it `access_token`.
    #[serde(alias = "access_token")]
    pub token: String,
    /// Profile of the logged-in user, when the server includes it.
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `POST /api/v1/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A recorded wrong question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    /// Owner of the question.
    pub user_id: i64,
    /// Question text, typed in or recognized from an image.
    pub content: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    /// URL of the uploaded question image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// Partial question used for create and update calls.
///
/// Absent fields are omitted from the JSON body so updates only touch what
/// was set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One page of the question list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub data: Vec<Question>,
    pub total: u64,
}

impl<'de> Deserialize<'de> for QuestionPage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Paged {
                data: Vec<Question>,
                #[serde(default)]
                total: Option<u64>,
            },
            Bare(Vec<Question>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Paged { data, total } => {
                let total = total.unwrap_or(data.len() as u64);
                Self { data, total }
            }
            Wire::Bare(data) => Self { total: data.len() as u64, data },
        })
    }
}

/// A response body that is either `{ "data": T }` or `T` itself.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Result of `POST /api/v1/image/process`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProcessResult {
    /// Where the server stored the uploaded image.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub image_url: String,
    /// OCR text extracted from the image.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub text: String,
}

/// A node in the knowledge-point catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgePoint {
    pub id: i64,
    pub subject: String,
    pub chapter: String,
    pub section: String,
    /// Name of the knowledge point itself.
    pub item: String,
    #[serde(default)]
    pub details: Option<String>,
    /// How many times users marked this point against a question.
    #[serde(default)]
    pub mark_count: i64,
    pub created_at: String,
}

/// A user's link between a question and a knowledge point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMark {
    pub id: i64,
    pub user_id: i64,
    pub knowledge_point_id: i64,
    pub question_id: i64,
    pub marked_at: String,
}

/// Filters for `GET /api/v1/knowledge/search`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeQuery {
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub section: Option<String>,
    /// Fuzzy match on the knowledge point name.
    pub item: Option<String>,
    /// Sort column, e.g. `mark_count` or `created_at`.
    pub sort_by: Option<String>,
    pub skip: u32,
    pub limit: u32,
}

impl Default for KnowledgeQuery {
    fn default() -> Self {
        Self {
            subject: None,
            chapter: None,
            section: None,
            item: None,
            sort_by: None,
            skip: 0,
            limit: 100,
        }
    }
}

/// A file picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type as reported by the picker, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
