//! Contact form submission and the admin inbox.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::forms::{normalize_email, normalize_optional, validate_form, ContactSubmission};
use heptapus_core::types::DbId;
use heptapus_db::models::contact_message::{ContactMessage, CreateContactMessage};
use heptapus_db::repositories::ContactMessageRepo;

use super::client_ip;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::InboxParams;
use crate::response::{DataResponse, SubmissionReceipt};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactMessage",
        id,
    })
}

/// POST /api/v1/contact
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(form): Json<ContactSubmission>,
) -> AppResult<(StatusCode, Json<SubmissionReceipt>)> {
    validate_form(&form)?;

    let ip = client_ip(&headers);
    state
        .captcha
        .verify(form.captcha_token.as_deref(), ip.as_deref())
        .await?;

    let input = CreateContactMessage {
        name: form.name.trim().to_string(),
        email: normalize_email(&form.email),
        phone: normalize_optional(form.phone),
        subject: normalize_optional(form.subject),
        message: form.message.trim().to_string(),
        ip_address: ip,
    };
    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionReceipt {
            id: message.id,
            status: "received",
        }),
    ))
}

/// GET /api/v1/admin/contact
///
/// `?unread=true` hides messages already read.
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<InboxParams>,
) -> AppResult<Json<DataResponse<Vec<ContactMessage>>>> {
    let (limit, offset) = params.page();
    let data = ContactMessageRepo::list(&state.pool, params.unread, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/admin/contact/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::set_read(&state.pool, id, true)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(message))
}

/// DELETE /api/v1/admin/contact/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ContactMessageRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
