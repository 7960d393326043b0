//! Repository for the `job_applications` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;

use crate::models::job_application::{CreateJobApplication, JobApplication};

const COLUMNS: &str = "id, job_posting_id, full_name, email, phone, cover_letter, resume_url, \
                       linkedin_url, status, created_at, updated_at";

/// Provides operations for job applications.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Insert a new application with status `new`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobApplication,
    ) -> Result<JobApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_applications (job_posting_id, full_name, email, phone, cover_letter,
                                           resume_url, linkedin_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(input.job_posting_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.cover_letter)
            .bind(&input.resume_url)
            .bind(&input.linkedin_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_applications WHERE id = $1");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List applications for one posting, newest first.
    pub async fn list_by_posting(
        pool: &PgPool,
        job_posting_id: DbId,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications
             WHERE job_posting_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(job_posting_id)
            .fetch_all(pool)
            .await
    }

    /// Set the review status. Returns `None` if the application does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE job_applications SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
