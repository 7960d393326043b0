//! Aggregate counts for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Gather all dashboard counters in a single round trip.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM projects WHERE is_published = true) AS published_projects,
                (SELECT COUNT(*) FROM blog_posts WHERE is_published = true) AS published_posts,
                (SELECT COUNT(*) FROM contact_messages WHERE is_read = false) AS unread_messages,
                (SELECT COUNT(*) FROM job_applications WHERE status = 'new') AS new_applications,
                (SELECT COUNT(*) FROM job_postings
                    WHERE is_active = true AND (closes_at IS NULL OR closes_at > NOW()))
                    AS open_job_postings,
                (SELECT COUNT(*) FROM subscribers WHERE is_active = true) AS active_subscribers",
        )
        .fetch_one(pool)
        .await
    }
}
