//! Handlers for partners.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::types::DbId;
use heptapus_db::models::partner::{CreatePartner, LocalizedPartner, Partner, UpdatePartner};
use heptapus_db::repositories::PartnerRepo;

use super::prepare_translations;
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Partner",
        id,
    })
}

/// GET /api/v1/partners
pub async fn list_active(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> AppResult<Json<DataResponse<Vec<LocalizedPartner>>>> {
    let partners = PartnerRepo::list(&state.pool, true).await?;
    let data = partners.iter().map(|p| p.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/partners
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(mut input): Json<CreatePartner>,
) -> AppResult<(StatusCode, Json<Partner>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Partner name must not be empty".into(),
        )));
    }
    prepare_translations(&mut input, Partner::TRANSLATABLE_FIELDS, None);
    let partner = PartnerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(partner)))
}

/// GET /api/v1/admin/partners
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DataResponse<Vec<Partner>>>> {
    let data = PartnerRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/partners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Partner>> {
    let partner = PartnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(partner))
}

/// PUT /api/v1/admin/partners/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePartner>,
) -> AppResult<Json<Partner>> {
    let existing = PartnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    prepare_translations(
        &mut input,
        Partner::TRANSLATABLE_FIELDS,
        Some(&existing.translations),
    );
    let partner = PartnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(partner))
}

/// DELETE /api/v1/admin/partners/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PartnerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
