//! Handlers for projects: public portfolio and `/admin/projects`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::slug::{resolve_slug, validate_slug};
use heptapus_core::types::DbId;
use heptapus_db::models::project::{CreateProject, LocalizedProject, Project, UpdateProject};
use heptapus_db::repositories::ProjectRepo;

use super::prepare_translations;
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::query::{FeaturedParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
pub async fn list_published(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Query(params): Query<FeaturedParams>,
) -> AppResult<Json<DataResponse<Vec<LocalizedProject>>>> {
    let projects = ProjectRepo::list_published(&state.pool, params.featured).await?;
    let data = projects.iter().map(|p| p.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{slug}
pub async fn get_published(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(slug): Path<String>,
) -> AppResult<Json<LocalizedProject>> {
    let project = ProjectRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: "Project",
            key: slug,
        }))?;
    Ok(Json(project.localize(locale)))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(mut input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    prepare_translations(&mut input, Project::TRANSLATABLE_FIELDS, None);

    let project = ProjectRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(project_id = project.id, %slug, user_id = user.user_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/admin/projects
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let (limit, offset) = params.resolve();
    let data = ProjectRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(slug) = input.slug.as_deref() {
        validate_slug(slug)?;
    }
    prepare_translations(
        &mut input,
        Project::TRANSLATABLE_FIELDS,
        Some(&existing.translations),
    );

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, user_id = user.user_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
