//! Repository for the `announcements` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

const COLUMNS: &str = "id, title, content, link_url, priority, is_active, starts_at, ends_at, \
                       translations, created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title, content, link_url, priority, is_active, starts_at,
                                        ends_at, translations)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true), $6, $7,
                     COALESCE($8, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.link_url)
            .bind(input.priority)
            .bind(input.is_active)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.translations)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List announcements that are active and inside their display window now.
    ///
    /// Highest priority first.
    pub async fn list_current(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements
             WHERE is_active = true
               AND (starts_at IS NULL OR starts_at <= NOW())
               AND (ends_at IS NULL OR ends_at > NOW())
             ORDER BY priority DESC, created_at DESC"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }

    /// List every announcement, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements ORDER BY created_at DESC");
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                link_url = COALESCE($4, link_url),
                priority = COALESCE($5, priority),
                is_active = COALESCE($6, is_active),
                starts_at = COALESCE($7, starts_at),
                ends_at = COALESCE($8, ends_at),
                translations = COALESCE($9, translations)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.link_url)
            .bind(input.priority)
            .bind(input.is_active)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.translations)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
