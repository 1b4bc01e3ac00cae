//! `/api/v1/knowledge` endpoints: the knowledge-point catalogue.

#[cfg(test)]
#[path = "knowledge_test.rs"]
mod knowledge_test;

use crate::error::ApiError;
use crate::http::{HttpClient, Navigator, TokenStore, Transport};
use crate::types::{KnowledgePoint, KnowledgeQuery};

pub const KNOWLEDGE_PATH: &str = "/api/v1/knowledge";

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn search_path(query: &KnowledgeQuery) -> String {
    let mut params = Vec::new();
    let optional = [
        ("subject", &query.subject),
        ("chapter", &query.chapter),
        ("section", &query.section),
        ("item", &query.item),
        ("sort_by", &query.sort_by),
    ];
    for (key, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            params.push(format!("{key}={}", encode(value)));
        }
    }
    params.push(format!("skip={}", query.skip));
    params.push(format!("limit={}", query.limit));
    format!("{KNOWLEDGE_PATH}/search?{}", params.join("&"))
}

/// All subjects in the catalogue.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn subjects<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
) -> Result<Vec<String>, ApiError> {
    client.get(&format!("{KNOWLEDGE_PATH}/subjects")).await
}

/// Chapters of one subject.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn chapters<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    subject: &str,
) -> Result<Vec<String>, ApiError> {
    client
        .get(&format!("{KNOWLEDGE_PATH}/chapters?subject={}", encode(subject)))
        .await
}

/// Sections of one chapter.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn sections<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    subject: &str,
    chapter: &str,
) -> Result<Vec<String>, ApiError> {
    let path = format!(
        "{KNOWLEDGE_PATH}/sections?subject={}&chapter={}",
        encode(subject),
        encode(chapter)
    );
    client.get(&path).await
}

/// Filtered, paged search.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn search<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    query: &KnowledgeQuery,
) -> Result<Vec<KnowledgePoint>, ApiError> {
    client.get(&search_path(query)).await
}

/// Most-marked knowledge points.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn popular<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    limit: u32,
) -> Result<Vec<KnowledgePoint>, ApiError> {
    client.get(&format!("{KNOWLEDGE_PATH}/popular?limit={limit}")).await
}

/// One knowledge point.
///
/// # Errors
///
/// Any [`ApiError`]; unknown ids arrive as `Server { status: 404 }`.
pub async fn get_point<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    id: i64,
) -> Result<KnowledgePoint, ApiError> {
    client.get(&format!("{KNOWLEDGE_PATH}/{id}")).await
}

/// Bump a point's mark count and return the updated point.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn mark_point<T: Transport, S: TokenStore, N: Navigator>(
    client: &HttpClient<T, S, N>,
    id: i64,
) -> Result<KnowledgePoint, ApiError> {
    client.post(&format!("{KNOWLEDGE_PATH}/mark/{id}")).await
}
