//! In-memory post repository - used when no database is configured and in tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPost, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// In-memory post store behind an async RwLock.
///
/// Posts are kept in insertion order, which is also `created` order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(index);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let post = BlogPost::from_draft(Uuid::new_v4(), draft, Utc::now());

        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, "Inserted post");

        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn replace_by_id(&self, id: Uuid, draft: PostDraft) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.apply(draft);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::Author;

    use super::*;

    fn draft(title: &str, first: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: "content".to_string(),
            author: Author::new(first, "Doe"),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let repo = InMemoryPostRepository::new();
        let a = repo.insert(draft("A", "John")).await.unwrap();
        let b = repo.insert(draft("B", "Jane")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.find_by_id(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.insert(draft("first", "John")).await.unwrap();
        repo.insert(draft("second", "John")).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_created() {
        let repo = InMemoryPostRepository::new();
        let original = repo.insert(draft("A", "John")).await.unwrap();

        repo.replace_by_id(original.id, draft("A2", "Jane"))
            .await
            .unwrap();

        let stored = repo.find_by_id(original.id).await.unwrap().unwrap();
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.created, original.created);
        assert_eq!(stored.title, "A2");
        assert_eq!(stored.author.first_name, "Jane");
    }

    #[tokio::test]
    async fn test_replace_unknown_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let result = repo.replace_by_id(Uuid::new_v4(), draft("A", "John")).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(draft("A", "John")).await.unwrap();

        repo.delete_by_id(post.id).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete_by_id(post.id).await,
            Err(RepoError::NotFound)
        ));
    }
}
