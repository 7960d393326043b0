//! Repository for the `projects` table.

use sqlx::PgPool;
use heptapus_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, description, content, category, image_url, website_url, \
                       is_featured, is_published, sort_order, translations, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `slug` must already be resolved; `translations` defaults to `{}`.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (slug, title, description, content, category, image_url,
                                   website_url, is_featured, is_published, sort_order, translations)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, false), COALESCE($9, false),
                     COALESCE($10, 0), COALESCE($11, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.website_url)
            .bind(input.is_featured)
            .bind(input.is_published)
            .bind(input.sort_order)
            .bind(&input.translations)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published project by slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE slug = $1 AND is_published = true");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List published projects by `sort_order`, optionally only featured ones.
    pub async fn list_published(
        pool: &PgPool,
        featured_only: bool,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE is_published = true AND ($1 = false OR is_featured = true)
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(featured_only)
            .fetch_all(pool)
            .await
    }

    /// List all projects (drafts included), most recently created first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                content = COALESCE($5, content),
                category = COALESCE($6, category),
                image_url = COALESCE($7, image_url),
                website_url = COALESCE($8, website_url),
                is_featured = COALESCE($9, is_featured),
                is_published = COALESCE($10, is_published),
                sort_order = COALESCE($11, sort_order),
                translations = COALESCE($12, translations)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.website_url)
            .bind(input.is_featured)
            .bind(input.is_published)
            .bind(input.sort_order)
            .bind(&input.translations)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
