//! Media library entity model and DTOs.
//!
//! Only metadata is stored; the file itself lives wherever `url` points.

use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub filename: String,
    pub url: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub alt_text: Option<String>,
    pub uploaded_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a media item. `uploaded_by` comes from the session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedia {
    pub filename: String,
    pub url: String,
    pub mime_type: String,
    pub size_bytes: Option<i64>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMedia {
    pub filename: Option<String>,
    pub alt_text: Option<String>,
}
