//! Newsletter subscriber entity model.

use heptapus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `subscribers` table.
///
/// Unsubscribing keeps the row (`is_active = false`) so a later signup with
/// the same address reactivates it instead of violating `uq_subscribers_email`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscriber {
    pub id: DbId,
    pub email: String,
    pub locale: String,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub unsubscribe_token: Uuid,
    pub unsubscribed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
