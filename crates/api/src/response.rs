//! Shared response envelope types for API handlers.
//!
//! List endpoints use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use heptapus_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Acknowledgement for a public form submission.
///
/// Only the new row's id is echoed back; stored details stay private.
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub id: DbId,
    pub status: &'static str,
}
