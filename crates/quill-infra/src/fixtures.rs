//! Seeding and teardown helpers for tests.
//!
//! Every helper takes the repository it works on; there is no shared
//! handle and no global state.

use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::{FirstName, LastName};

use quill_core::domain::{Author, BlogPost, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};
use quill_shared::{AuthorRequest, PostRequest};

/// A complete, valid create body with random content.
pub fn generate_post_request() -> PostRequest {
    PostRequest {
        id: None,
        title: Some(Sentence(3..8).fake()),
        content: Some(Paragraph(1..3).fake()),
        author: Some(AuthorRequest {
            first_name: Some(FirstName().fake()),
            last_name: Some(LastName().fake()),
        }),
    }
}

/// A random draft that can be inserted directly.
pub fn generate_draft() -> PostDraft {
    PostDraft {
        title: Sentence(3..8).fake::<String>().trim().to_string(),
        content: Paragraph(1..3).fake::<String>().trim().to_string(),
        author: Author::new(FirstName().fake::<String>(), LastName().fake::<String>()),
    }
}

/// Insert `count` random posts and return them in insertion order.
pub async fn seed_posts(
    repo: &dyn PostRepository,
    count: usize,
) -> Result<Vec<BlogPost>, RepoError> {
    tracing::debug!(count, "Seeding posts");

    let mut posts = Vec::with_capacity(count);
    for _ in 0..count {
        posts.push(repo.insert(generate_draft()).await?);
    }
    Ok(posts)
}

/// Remove every post from `repo`.
pub async fn tear_down(repo: &dyn PostRepository) -> Result<(), RepoError> {
    for post in repo.find_all().await? {
        repo.delete_by_id(post.id).await?;
    }
    Ok(())
}
