use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostDraft};
use crate::error::RepoError;

/// Generic repository trait for id-addressed lookups and removal.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` if absent.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the persistence collaborator of the posts API.
///
/// Each method is a single logical store operation; implementations must
/// make id-scoped writes atomic.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// Store a draft, assigning its `id` and `created` timestamp.
    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError>;

    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Replace title, content and author of an existing post.
    /// Returns `RepoError::NotFound` if absent.
    async fn replace_by_id(&self, id: Uuid, draft: PostDraft) -> Result<(), RepoError>;
}
