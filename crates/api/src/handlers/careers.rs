//! Handlers for job postings and applications.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use heptapus_core::careers::{validate_application_status, validate_employment_type};
use heptapus_core::error::CoreError;
use heptapus_core::forms::{
    normalize_email, normalize_optional, validate_form, JobApplicationSubmission,
};
use heptapus_core::slug::{resolve_slug, validate_slug};
use heptapus_core::types::DbId;
use heptapus_db::models::job_application::{
    CreateJobApplication, JobApplication, UpdateApplicationStatus,
};
use heptapus_db::models::job_posting::{
    CreateJobPosting, JobPosting, LocalizedJobPosting, UpdateJobPosting,
};
use heptapus_db::repositories::{JobApplicationRepo, JobPostingRepo};

use super::{client_ip, prepare_translations};
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::response::{DataResponse, SubmissionReceipt};
use crate::state::AppState;

fn posting_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "JobPosting",
        id,
    })
}

fn open_posting_not_found(slug: String) -> AppError {
    AppError::Core(CoreError::NotFoundByKey {
        entity: "JobPosting",
        key: slug,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/careers
pub async fn list_open(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> AppResult<Json<DataResponse<Vec<LocalizedJobPosting>>>> {
    let postings = JobPostingRepo::list_open(&state.pool).await?;
    let data = postings.iter().map(|p| p.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/careers/{slug}
pub async fn get_open(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(slug): Path<String>,
) -> AppResult<Json<LocalizedJobPosting>> {
    let posting = JobPostingRepo::find_open_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| open_posting_not_found(slug))?;
    Ok(Json(posting.localize(locale)))
}

/// POST /api/v1/careers/{slug}/apply
///
/// Closed or unknown postings answer 404.
pub async fn apply(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(form): Json<JobApplicationSubmission>,
) -> AppResult<(StatusCode, Json<SubmissionReceipt>)> {
    validate_form(&form)?;

    let posting = JobPostingRepo::find_open_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| open_posting_not_found(slug))?;

    let ip = client_ip(&headers);
    state
        .captcha
        .verify(form.captcha_token.as_deref(), ip.as_deref())
        .await?;

    let input = CreateJobApplication {
        job_posting_id: posting.id,
        full_name: form.full_name.trim().to_string(),
        email: normalize_email(&form.email),
        phone: normalize_optional(form.phone),
        cover_letter: normalize_optional(form.cover_letter),
        resume_url: normalize_optional(form.resume_url),
        linkedin_url: normalize_optional(form.linkedin_url),
    };
    let application = JobApplicationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        application_id = application.id,
        job_posting_id = posting.id,
        "Job application received"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionReceipt {
            id: application.id,
            status: "received",
        }),
    ))
}

// ---------------------------------------------------------------------------
// Admin: postings
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/jobs
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(mut input): Json<CreateJobPosting>,
) -> AppResult<(StatusCode, Json<JobPosting>)> {
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    if let Some(kind) = input.employment_type.as_deref() {
        validate_employment_type(kind)?;
    }
    prepare_translations(&mut input, JobPosting::TRANSLATABLE_FIELDS, None);

    let posting = JobPostingRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(job_posting_id = posting.id, %slug, "Job posting created");
    Ok((StatusCode::CREATED, Json(posting)))
}

/// GET /api/v1/admin/jobs
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DataResponse<Vec<JobPosting>>>> {
    let data = JobPostingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/jobs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<JobPosting>> {
    let posting = JobPostingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| posting_not_found(id))?;
    Ok(Json(posting))
}

/// PUT /api/v1/admin/jobs/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateJobPosting>,
) -> AppResult<Json<JobPosting>> {
    let existing = JobPostingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| posting_not_found(id))?;
    if let Some(slug) = input.slug.as_deref() {
        validate_slug(slug)?;
    }
    if let Some(kind) = input.employment_type.as_deref() {
        validate_employment_type(kind)?;
    }
    prepare_translations(
        &mut input,
        JobPosting::TRANSLATABLE_FIELDS,
        Some(&existing.translations),
    );

    let posting = JobPostingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| posting_not_found(id))?;
    Ok(Json(posting))
}

/// DELETE /api/v1/admin/jobs/{id}
///
/// Applications to the posting are deleted with it.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if JobPostingRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(posting_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Admin: applications
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/jobs/{id}/applications
pub async fn list_applications(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<JobApplication>>>> {
    JobPostingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| posting_not_found(id))?;
    let data = JobApplicationRepo::list_by_posting(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/admin/applications/{id}/status
pub async fn update_application_status(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplicationStatus>,
) -> AppResult<Json<JobApplication>> {
    validate_application_status(&input.status)?;
    let application = JobApplicationRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "JobApplication",
            id,
        }))?;
    tracing::info!(
        application_id = id,
        status = %input.status,
        user_id = user.user_id,
        "Application status changed"
    );
    Ok(Json(application))
}
