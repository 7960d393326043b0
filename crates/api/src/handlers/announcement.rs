//! Handlers for site-wide announcements.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::types::{DbId, Timestamp};
use heptapus_db::models::announcement::{
    Announcement, CreateAnnouncement, LocalizedAnnouncement, UpdateAnnouncement,
};
use heptapus_db::repositories::AnnouncementRepo;

use super::prepare_translations;
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Announcement",
        id,
    })
}

fn validate_window(starts_at: Option<Timestamp>, ends_at: Option<Timestamp>) -> AppResult<()> {
    match (starts_at, ends_at) {
        (Some(start), Some(end)) if end <= start => Err(AppError::Core(CoreError::Validation(
            "ends_at must be after starts_at".into(),
        ))),
        _ => Ok(()),
    }
}

/// GET /api/v1/announcements
///
/// Active announcements inside their display window, highest priority first.
pub async fn list_current(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> AppResult<Json<DataResponse<Vec<LocalizedAnnouncement>>>> {
    let announcements = AnnouncementRepo::list_current(&state.pool).await?;
    let data = announcements.iter().map(|a| a.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/announcements
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(mut input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    validate_window(input.starts_at, input.ends_at)?;
    prepare_translations(&mut input, Announcement::TRANSLATABLE_FIELDS, None);
    let announcement = AnnouncementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// GET /api/v1/admin/announcements
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DataResponse<Vec<Announcement>>>> {
    let data = AnnouncementRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/announcements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(announcement))
}

/// PUT /api/v1/admin/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    let existing = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_window(
        input.starts_at.or(existing.starts_at),
        input.ends_at.or(existing.ends_at),
    )?;
    prepare_translations(
        &mut input,
        Announcement::TRANSLATABLE_FIELDS,
        Some(&existing.translations),
    );
    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(announcement))
}

/// DELETE /api/v1/admin/announcements/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AnnouncementRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
