//! Admin dashboard aggregate counts.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardStats {
    pub published_projects: i64,
    pub published_posts: i64,
    pub unread_messages: i64,
    pub new_applications: i64,
    pub open_job_postings: i64,
    pub active_subscribers: i64,
}
