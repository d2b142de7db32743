//! Blog post handlers.
//!
//! Each handler validates its input first and then issues exactly one
//! repository call. Store failures are never retried here.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use quill_core::RepoError;
use quill_core::domain::{to_public_view, validate_for_create, validate_for_update};
use quill_core::ports::BaseRepository;
use quill_shared::{PostListResponse, PostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    let views: Vec<PostResponse> = posts.iter().map(to_public_view).collect();
    tracing::debug!(count = views.len(), "Listed posts");

    Ok(HttpResponse::Ok().json(PostListResponse::from(views)))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post_id = parse_post_id(&id)?;

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::post_not_found(&id))?;

    Ok(HttpResponse::Ok().json(to_public_view(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let draft = validate_for_create(&body.into_inner())?;

    let post = state.posts.insert(draft).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(to_public_view(&post)))
}

/// PUT /posts/{id} - full replacement of title, content and author.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = validate_for_update(&body.into_inner(), &id)?;
    let post_id = parse_post_id(&id)?;

    state
        .posts
        .replace_by_id(post_id, draft)
        .await
        .map_err(|e| missing_post(e, &id))?;
    tracing::info!(post_id = %post_id, "Post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post_id = parse_post_id(&id)?;

    state
        .posts
        .delete_by_id(post_id)
        .await
        .map_err(|e| missing_post(e, &id))?;
    tracing::info!(post_id = %post_id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// A path segment that is not a UUID cannot address any post.
fn parse_post_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::post_not_found(id))
}

fn missing_post(err: RepoError, id: &str) -> AppError {
    match err {
        RepoError::NotFound => AppError::post_not_found(id),
        other => other.into(),
    }
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
