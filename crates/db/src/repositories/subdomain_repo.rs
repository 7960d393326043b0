//! Repository for the `subdomains` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;

use crate::models::subdomain::{CreateSubdomain, Subdomain, UpdateSubdomain};

const COLUMNS: &str = "id, slug, title, description, content, theme_color, is_active, \
                       translations, created_at, updated_at";

/// Provides CRUD operations for subdomain micro-sites.
pub struct SubdomainRepo;

impl SubdomainRepo {
    pub async fn create(pool: &PgPool, input: &CreateSubdomain) -> Result<Subdomain, sqlx::Error> {
        let query = format!(
            "INSERT INTO subdomains (slug, title, description, content, theme_color, is_active,
                                     translations)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true), COALESCE($7, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subdomain>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.theme_color)
            .bind(input.is_active)
            .bind(&input.translations)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subdomain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subdomains WHERE id = $1");
        sqlx::query_as::<_, Subdomain>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active micro-site by its DNS label.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Subdomain>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM subdomains WHERE slug = $1 AND is_active = true");
        sqlx::query_as::<_, Subdomain>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Subdomain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subdomains ORDER BY slug ASC");
        sqlx::query_as::<_, Subdomain>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubdomain,
    ) -> Result<Option<Subdomain>, sqlx::Error> {
        let query = format!(
            "UPDATE subdomains SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                content = COALESCE($5, content),
                theme_color = COALESCE($6, theme_color),
                is_active = COALESCE($7, is_active),
                translations = COALESCE($8, translations)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subdomain>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.theme_color)
            .bind(input.is_active)
            .bind(&input.translations)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subdomains WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
