//! Admin dashboard counters.

use axum::extract::State;
use axum::Json;
use heptapus_db::models::dashboard::DashboardStats;
use heptapus_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// GET /api/v1/admin/dashboard
pub async fn stats(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
