//! Site settings: public key/value map and admin management.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use heptapus_core::error::CoreError;
use heptapus_db::models::setting::{Setting, UpsertSetting};
use heptapus_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireEditor};
use crate::response::DataResponse;
use crate::state::AppState;

const MAX_KEY_LENGTH: usize = 64;

fn validate_key(key: &str) -> AppResult<()> {
    let valid = !key.is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Invalid setting key '{key}'"
        ))))
    }
}

/// GET /api/v1/settings
///
/// Only settings flagged `is_public`, as a flat `key -> value` map.
pub async fn public_map(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<BTreeMap<String, String>>>> {
    let settings = SettingRepo::list_public(&state.pool).await?;
    let data = settings.into_iter().map(|s| (s.key, s.value)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/settings
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DataResponse<Vec<Setting>>>> {
    let data = SettingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/admin/settings
///
/// Bulk upsert; all entries are saved or none are.
pub async fn upsert(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(entries): Json<Vec<UpsertSetting>>,
) -> AppResult<Json<DataResponse<Vec<Setting>>>> {
    for entry in &entries {
        validate_key(&entry.key)?;
    }
    let data = SettingRepo::upsert_many(&state.pool, &entries).await?;
    tracing::info!(count = data.len(), user_id = admin.user_id, "Settings updated");
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/admin/settings/{key}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(key): Path<String>,
) -> AppResult<StatusCode> {
    if SettingRepo::delete(&state.pool, &key).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Setting",
            key,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_keys() {
        assert!(validate_key("site_name").is_ok());
        assert!(validate_key("social.linkedin").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("Site Name").is_err());
        assert!(validate_key(&"a".repeat(65)).is_err());
    }
}
