//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use quill_core::domain::{BlogPost, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let post = BlogPost::from_draft(Uuid::new_v4(), draft, Utc::now());

        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;
        tracing::debug!(post_id = %model.id, "Inserted post");

        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace_by_id(&self, id: Uuid, draft: PostDraft) -> Result<(), RepoError> {
        // Single UPDATE: id and created are never part of the SET list.
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(draft.title))
            .col_expr(post::Column::Content, Expr::value(draft.content))
            .col_expr(
                post::Column::AuthorFirstName,
                Expr::value(draft.author.first_name),
            )
            .col_expr(
                post::Column::AuthorLastName,
                Expr::value(draft.author.last_name),
            )
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Replaced post");
        Ok(())
    }
}
