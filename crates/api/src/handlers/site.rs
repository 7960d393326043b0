//! Subdomain micro-sites: public lookup and `/admin/subdomains`.

use axum::extract::{Path, State};
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::subdomain::{subdomain_from_host, validate_subdomain_slug};
use heptapus_core::types::DbId;
use heptapus_db::models::subdomain::{
    CreateSubdomain, LocalizedSubdomain, Subdomain, UpdateSubdomain,
};
use heptapus_db::repositories::SubdomainRepo;

use super::prepare_translations;
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Subdomain",
        id,
    })
}

async fn find_active(state: &AppState, slug: String) -> AppResult<Subdomain> {
    SubdomainRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: "Site",
            key: slug,
        }))
}

/// GET /api/v1/sites/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(slug): Path<String>,
) -> AppResult<Json<LocalizedSubdomain>> {
    let site = find_active(&state, slug).await?;
    Ok(Json(site.localize(locale)))
}

/// GET /api/v1/sites/current
///
/// Resolves the micro-site from `X-Forwarded-Host` or `Host` against the
/// configured base domain. The bare domain and reserved labels are 404.
pub async fn current(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    headers: HeaderMap,
) -> AppResult<Json<LocalizedSubdomain>> {
    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(HOST))
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let slug = subdomain_from_host(host, &state.config.base_domain).ok_or_else(|| {
        AppError::Core(CoreError::NotFoundByKey {
            entity: "Site",
            key: host.to_string(),
        })
    })?;
    let site = find_active(&state, slug).await?;
    Ok(Json(site.localize(locale)))
}

/// POST /api/v1/admin/subdomains
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(mut input): Json<CreateSubdomain>,
) -> AppResult<(StatusCode, Json<Subdomain>)> {
    input.slug = input.slug.trim().to_ascii_lowercase();
    validate_subdomain_slug(&input.slug)?;
    prepare_translations(&mut input, Subdomain::TRANSLATABLE_FIELDS, None);

    let site = SubdomainRepo::create(&state.pool, &input).await?;
    tracing::info!(subdomain_id = site.id, slug = %site.slug, "Subdomain created");
    Ok((StatusCode::CREATED, Json(site)))
}

/// GET /api/v1/admin/subdomains
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DataResponse<Vec<Subdomain>>>> {
    let data = SubdomainRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/subdomains/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Subdomain>> {
    let site = SubdomainRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(site))
}

/// PUT /api/v1/admin/subdomains/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateSubdomain>,
) -> AppResult<Json<Subdomain>> {
    let existing = SubdomainRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(slug) = input.slug.as_mut() {
        *slug = slug.trim().to_ascii_lowercase();
        validate_subdomain_slug(slug)?;
    }
    prepare_translations(
        &mut input,
        Subdomain::TRANSLATABLE_FIELDS,
        Some(&existing.translations),
    );

    let site = SubdomainRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(site))
}

/// DELETE /api/v1/admin/subdomains/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SubdomainRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
