//! Repository for the `job_postings` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;

use crate::models::job_posting::{CreateJobPosting, JobPosting, UpdateJobPosting};

const COLUMNS: &str = "id, slug, title, department, location, employment_type, description, \
                       requirements, is_active, closes_at, translations, created_at, updated_at";

/// SQL predicate for postings that accept applications.
const OPEN: &str = "is_active = true AND (closes_at IS NULL OR closes_at > NOW())";

/// Provides CRUD operations for job postings.
pub struct JobPostingRepo;

impl JobPostingRepo {
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        input: &CreateJobPosting,
    ) -> Result<JobPosting, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_postings (slug, title, department, location, employment_type,
                                       description, requirements, is_active, closes_at,
                                       translations)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'full-time'), $6, $7, COALESCE($8, true), $9,
                     COALESCE($10, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobPosting>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.department)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.is_active)
            .bind(input.closes_at)
            .bind(&input.translations)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobPosting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_postings WHERE id = $1");
        sqlx::query_as::<_, JobPosting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a posting by slug, only while it is open for applications.
    pub async fn find_open_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<JobPosting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_postings WHERE slug = $1 AND {OPEN}");
        sqlx::query_as::<_, JobPosting>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List open postings, most recently created first.
    pub async fn list_open(pool: &PgPool) -> Result<Vec<JobPosting>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM job_postings WHERE {OPEN} ORDER BY created_at DESC");
        sqlx::query_as::<_, JobPosting>(&query)
            .fetch_all(pool)
            .await
    }

    /// List every posting, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<JobPosting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_postings ORDER BY created_at DESC");
        sqlx::query_as::<_, JobPosting>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobPosting,
    ) -> Result<Option<JobPosting>, sqlx::Error> {
        let query = format!(
            "UPDATE job_postings SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                department = COALESCE($4, department),
                location = COALESCE($5, location),
                employment_type = COALESCE($6, employment_type),
                description = COALESCE($7, description),
                requirements = COALESCE($8, requirements),
                is_active = COALESCE($9, is_active),
                closes_at = COALESCE($10, closes_at),
                translations = COALESCE($11, translations)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobPosting>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.department)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.is_active)
            .bind(input.closes_at)
            .bind(&input.translations)
            .fetch_optional(pool)
            .await
    }

    /// Delete a posting; its applications are removed by the FK cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
