//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Every field is optional at the schema level; presence and emptiness are
/// checked by the post validators so the client gets the exact field name
/// back. Unknown fields are ignored. `id` is accepted in any JSON form:
/// create discards it and update only compares its text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorRequest>,
}

impl PostRequest {
    /// Text form of the body `id`: strings as-is, anything else as JSON.
    pub fn id_text(&self) -> Option<String> {
        self.id.as_ref().map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Structured author name as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Public view of a post. `author` is the joined display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Response of `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub count: usize,
}

impl From<Vec<PostResponse>> for PostListResponse {
    fn from(posts: Vec<PostResponse>) -> Self {
        Self {
            count: posts.len(),
            posts,
        }
    }
}
