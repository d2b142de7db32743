use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_shared::PostResponse;

/// Structured author name. Both parts are non-empty once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The "first last" form shown in API responses. Never stored.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - a stored post with its storage-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Build the stored record for a validated draft.
    pub fn from_draft(id: Uuid, draft: PostDraft, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created,
        }
    }

    /// Replace the mutable fields as a unit. `id` and `created` are kept.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
    }
}

/// A validated, trimmed post body without identity, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// Public view of a post: the only shape ever sent to clients.
pub fn to_public_view(post: &BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.display_name(),
    }
}

impl From<&BlogPost> for PostResponse {
    fn from(post: &BlogPost) -> Self {
        to_public_view(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> BlogPost {
        BlogPost::from_draft(
            Uuid::new_v4(),
            PostDraft {
                title: "A".to_string(),
                content: "B".to_string(),
                author: Author::new("John", "Doe"),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_display_name_joins_first_and_last() {
        assert_eq!(Author::new("John", "Doe").display_name(), "John Doe");
    }

    #[test]
    fn test_public_view_flattens_author() {
        let post = sample_post();
        let view = to_public_view(&post);

        assert_eq!(view.id, post.id.to_string());
        assert_eq!(view.title, "A");
        assert_eq!(view.content, "B");
        assert_eq!(view.author, "John Doe");
        assert_eq!(PostResponse::from(&post), view);
    }

    #[test]
    fn test_apply_keeps_identity_and_creation_time() {
        let mut post = sample_post();
        let (id, created) = (post.id, post.created);

        post.apply(PostDraft {
            title: "A2".to_string(),
            content: "B2".to_string(),
            author: Author::new("Jane", "Doe"),
        });

        assert_eq!(post.id, id);
        assert_eq!(post.created, created);
        assert_eq!(post.title, "A2");
        assert_eq!(post.author, Author::new("Jane", "Doe"));
    }
}
