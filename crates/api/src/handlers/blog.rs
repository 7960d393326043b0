//! Handlers for blog posts: public feed and `/admin/blog`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::slug::{resolve_slug, validate_slug};
use heptapus_core::types::DbId;
use heptapus_db::models::blog_post::{BlogPost, CreateBlogPost, LocalizedBlogPost, UpdateBlogPost};
use heptapus_db::repositories::BlogPostRepo;

use super::prepare_translations;
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BlogPost",
        id,
    })
}

/// GET /api/v1/blog
///
/// Newest first, paginated with `?limit=&offset=`.
pub async fn list_published(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<LocalizedBlogPost>>>> {
    let (limit, offset) = params.resolve();
    let posts = BlogPostRepo::list_published(&state.pool, limit, offset).await?;
    let data = posts.iter().map(|p| p.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/blog/{slug}
pub async fn get_published(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(slug): Path<String>,
) -> AppResult<Json<LocalizedBlogPost>> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: "BlogPost",
            key: slug,
        }))?;
    Ok(Json(post.localize(locale)))
}

/// POST /api/v1/admin/blog
///
/// The authenticated user is recorded as the author.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(mut input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    prepare_translations(&mut input, BlogPost::TRANSLATABLE_FIELDS, None);

    let post = BlogPostRepo::create(&state.pool, &slug, Some(user.user_id), &input).await?;
    tracing::info!(post_id = post.id, %slug, user_id = user.user_id, "Blog post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/v1/admin/blog
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<BlogPost>>>> {
    let (limit, offset) = params.resolve();
    let data = BlogPostRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/blog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// PUT /api/v1/admin/blog/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let existing = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(slug) = input.slug.as_deref() {
        validate_slug(slug)?;
    }
    prepare_translations(
        &mut input,
        BlogPost::TRANSLATABLE_FIELDS,
        Some(&existing.translations),
    );

    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// DELETE /api/v1/admin/blog/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BlogPostRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
