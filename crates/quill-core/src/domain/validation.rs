//! Field rules for post bodies.
//!
//! Both validators trim every field and reject missing or blank values,
//! reporting the first offending field in the order title, content,
//! author.firstName, author.lastName. A client-supplied `id` never makes
//! it into the returned [`PostDraft`].

use quill_shared::PostRequest;

use super::post::{Author, PostDraft};
use crate::error::ValidationError;

/// Validate the body of a create request.
pub fn validate_for_create(input: &PostRequest) -> Result<PostDraft, ValidationError> {
    normalize(input)
}

/// Validate the body of an update request addressed to `existing_id`.
///
/// A body `id`, when present, must name the same record as the path.
pub fn validate_for_update(
    input: &PostRequest,
    existing_id: &str,
) -> Result<PostDraft, ValidationError> {
    let draft = normalize(input)?;

    if let Some(body_id) = input.id_text() {
        let path_id = existing_id.trim();
        if body_id.trim() != path_id {
            return Err(ValidationError::IdMismatch {
                path_id: path_id.to_string(),
                body_id,
            });
        }
    }

    Ok(draft)
}

fn normalize(input: &PostRequest) -> Result<PostDraft, ValidationError> {
    let title = required(input.title.as_deref(), "title")?;
    let content = required(input.content.as_deref(), "content")?;

    let author = input.author.as_ref();
    let first_name = required(
        author.and_then(|a| a.first_name.as_deref()),
        "author.firstName",
    )?;
    let last_name = required(
        author.and_then(|a| a.last_name.as_deref()),
        "author.lastName",
    )?;

    Ok(PostDraft {
        title,
        content,
        author: Author::new(first_name, last_name),
    })
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::MissingField { field }),
    }
}
