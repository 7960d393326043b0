//! Request handlers, one module per resource.
//!
//! Public handlers resolve content for the request locale; admin handlers
//! (behind [`RequireEditor`](crate::middleware::rbac::RequireEditor) or
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin)) work on raw rows.

pub mod announcement;
pub mod auth;
pub mod blog;
pub mod careers;
pub mod contact;
pub mod dashboard;
pub mod faq;
pub mod media;
pub mod newsletter;
pub mod partner;
pub mod project;
pub mod setting;
pub mod site;
pub mod user;

use axum::http::HeaderMap;
use heptapus_core::i18n::{collect_translations, translations_to_json};
use heptapus_db::models::TranslationInput;
use serde_json::Value;

/// Fold the request's `translations` object and flat `<field>_<locale>` keys
/// into the payload's `translations`, ready for the repository.
///
/// `existing` is the stored blob when updating; flat keys are laid over it.
/// When the request carries neither shape `translations` ends up `None` and
/// the column is left alone.
pub(crate) fn prepare_translations<T: TranslationInput>(
    input: &mut T,
    fields: &[&str],
    existing: Option<&Value>,
) {
    let collected = collect_translations(
        fields,
        input.explicit_translations(),
        input.localized_fields(),
        existing,
    );
    input.set_translations(collected.as_ref().map(translations_to_json));
}

/// Best-effort client address for spam tracking and CAPTCHA `remoteip`.
///
/// The API runs behind a reverse proxy, so the first `X-Forwarded-For` hop is
/// used, then `X-Real-IP`.
pub(crate) fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .or_else(|| headers.get("x-real-ip").and_then(|v| v.to_str().ok()))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
