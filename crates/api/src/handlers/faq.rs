//! Handlers for FAQ items.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::types::DbId;
use heptapus_db::models::faq::{CreateFaqItem, FaqItem, LocalizedFaqItem, UpdateFaqItem};
use heptapus_db::repositories::FaqRepo;

use super::prepare_translations;
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::query::CategoryParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "FaqItem",
        id,
    })
}

/// GET /api/v1/faq
pub async fn list_active(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<DataResponse<Vec<LocalizedFaqItem>>>> {
    let category = params.category.as_deref().filter(|c| !c.is_empty());
    let items = FaqRepo::list_active(&state.pool, category).await?;
    let data = items.iter().map(|i| i.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/faq
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(mut input): Json<CreateFaqItem>,
) -> AppResult<(StatusCode, Json<FaqItem>)> {
    if input.question.trim().is_empty() || input.answer.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Question and answer must not be empty".into(),
        )));
    }
    prepare_translations(&mut input, FaqItem::TRANSLATABLE_FIELDS, None);
    let item = FaqRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/admin/faq
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DataResponse<Vec<FaqItem>>>> {
    let data = FaqRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/faq/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<FaqItem>> {
    let item = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/v1/admin/faq/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateFaqItem>,
) -> AppResult<Json<FaqItem>> {
    let existing = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    prepare_translations(
        &mut input,
        FaqItem::TRANSLATABLE_FIELDS,
        Some(&existing.translations),
    );
    let item = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// DELETE /api/v1/admin/faq/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FaqRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
