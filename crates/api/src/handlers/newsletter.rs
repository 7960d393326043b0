//! Newsletter subscription and the admin subscriber list.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_core::forms::{normalize_email, validate_form, NewsletterSignup};
use heptapus_core::i18n::Locale;
use heptapus_core::types::DbId;
use heptapus_db::models::subscriber::Subscriber;
use heptapus_db::repositories::subscriber_repo::SubscribeOutcome;
use heptapus_db::repositories::SubscriberRepo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client_ip;
use crate::error::{AppError, AppResult};
use crate::middleware::locale::RequestLocale;
use crate::middleware::rbac::RequireEditor;
use crate::query::InboxParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `POST /newsletter/subscribe`.
#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub email: String,
    pub locale: String,
    /// `subscribed`, `resubscribed` or `already_subscribed`.
    pub status: &'static str,
}

/// Request body for `POST /newsletter/unsubscribe`.
#[derive(Debug, Deserialize)]
pub struct UnsubscribeRequest {
    pub token: Uuid,
}

/// POST /api/v1/newsletter/subscribe
///
/// 201 for a new address, 200 when the address was already known (active or
/// reactivated).
pub async fn subscribe(
    State(state): State<AppState>,
    RequestLocale(request_locale): RequestLocale,
    headers: HeaderMap,
    Json(form): Json<NewsletterSignup>,
) -> AppResult<(StatusCode, Json<SubscriptionResponse>)> {
    validate_form(&form)?;

    let ip = client_ip(&headers);
    state
        .captcha
        .verify(form.captcha_token.as_deref(), ip.as_deref())
        .await?;

    let email = normalize_email(&form.email);
    let locale: Locale = form.locale.unwrap_or(request_locale);
    let (subscriber, outcome) = SubscriberRepo::subscribe(&state.pool, &email, locale.code()).await?;

    let (status_code, status) = match outcome {
        SubscribeOutcome::Created => (StatusCode::CREATED, "subscribed"),
        SubscribeOutcome::Reactivated => (StatusCode::OK, "resubscribed"),
        SubscribeOutcome::AlreadyActive => (StatusCode::OK, "already_subscribed"),
    };
    tracing::info!(subscriber_id = subscriber.id, status, "Newsletter subscription");

    Ok((
        status_code,
        Json(SubscriptionResponse {
            email: subscriber.email,
            locale: subscriber.locale,
            status,
        }),
    ))
}

/// POST /api/v1/newsletter/unsubscribe
///
/// The token comes from the link in each newsletter email.
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(input): Json<UnsubscribeRequest>,
) -> AppResult<StatusCode> {
    if SubscriberRepo::unsubscribe(&state.pool, input.token).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Subscription",
            key: input.token.to_string(),
        }))
    }
}

/// GET /api/v1/admin/subscribers
///
/// `?active=true` hides unsubscribed addresses.
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<InboxParams>,
) -> AppResult<Json<DataResponse<Vec<Subscriber>>>> {
    let (limit, offset) = params.page();
    let data = SubscriberRepo::list(&state.pool, params.active, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/admin/subscribers/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SubscriberRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Subscriber",
            id,
        }))
    }
}
