//! Handlers for the media library (metadata only).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::types::DbId;
use heptapus_db::models::media::{CreateMedia, Media, UpdateMedia};
use heptapus_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::MediaListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Media",
        id,
    })
}

fn validate_new(input: &CreateMedia) -> AppResult<()> {
    let mut invalid = Vec::new();
    if input.filename.trim().is_empty() {
        invalid.push("filename");
    }
    let url = input.url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')) {
        invalid.push("url");
    }
    if !input.mime_type.contains('/') {
        invalid.push("mime_type");
    }
    if input.size_bytes.is_some_and(|s| s < 0) {
        invalid.push("size_bytes");
    }
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Invalid value for: {}",
            invalid.join(", ")
        ))))
    }
}

/// POST /api/v1/admin/media
///
/// Registers an already-hosted file; the uploader is the current user.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateMedia>,
) -> AppResult<(StatusCode, Json<Media>)> {
    validate_new(&input)?;
    let media = MediaRepo::create(&state.pool, Some(user.user_id), &input).await?;
    Ok((StatusCode::CREATED, Json(media)))
}

/// GET /api/v1/admin/media
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<MediaListParams>,
) -> AppResult<Json<DataResponse<Vec<Media>>>> {
    let (limit, offset) = params.page();
    let mime = params.mime.as_deref().filter(|m| !m.is_empty());
    let data = MediaRepo::list(&state.pool, mime, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/media/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Media>> {
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(media))
}

/// PUT /api/v1/admin/media/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedia>,
) -> AppResult<Json<Media>> {
    let media = MediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(media))
}

/// DELETE /api/v1/admin/media/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MediaRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
