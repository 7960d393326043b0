//! Repository for the `media` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media, UpdateMedia};

const COLUMNS: &str =
    "id, filename, url, mime_type, size_bytes, alt_text, uploaded_by, created_at, updated_at";

pub struct MediaRepo;

impl MediaRepo {
    pub async fn create(
        pool: &PgPool,
        uploaded_by: Option<DbId>,
        input: &CreateMedia,
    ) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (filename, url, mime_type, size_bytes, alt_text, uploaded_by)
             VALUES ($1, $2, $3, COALESCE($4, 0), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.filename)
            .bind(&input.url)
            .bind(&input.mime_type)
            .bind(input.size_bytes)
            .bind(&input.alt_text)
            .bind(uploaded_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media, newest first, optionally restricted to a MIME prefix such as `image/`.
    pub async fn list(
        pool: &PgPool,
        mime_prefix: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media
             WHERE ($1::text IS NULL OR starts_with(mime_type, $1))
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(mime_prefix)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE media SET
                filename = COALESCE($2, filename),
                alt_text = COALESCE($3, alt_text)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(&input.filename)
            .bind(&input.alt_text)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
