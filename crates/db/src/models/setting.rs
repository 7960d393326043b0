//! Site setting key/value model.

use heptapus_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry of the bulk `PUT /admin/settings` body.
///
/// `is_public` is left unchanged on existing keys when omitted, and defaults
/// to `false` for new keys.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSetting {
    pub key: String,
    pub value: String,
    pub is_public: Option<bool>,
}
