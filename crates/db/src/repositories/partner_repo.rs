//! Repository for the `partners` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;

use crate::models::partner::{CreatePartner, Partner, UpdatePartner};

const COLUMNS: &str = "id, name, logo_url, website_url, description, sort_order, is_active, \
                       translations, created_at, updated_at";

/// Provides CRUD operations for partners.
pub struct PartnerRepo;

impl PartnerRepo {
    pub async fn create(pool: &PgPool, input: &CreatePartner) -> Result<Partner, sqlx::Error> {
        let query = format!(
            "INSERT INTO partners (name, logo_url, website_url, description, sort_order, is_active,
                                   translations)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, true),
                     COALESCE($7, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(&input.name)
            .bind(&input.logo_url)
            .bind(&input.website_url)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(&input.translations)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partners WHERE id = $1");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List partners in display order; `active_only` hides deactivated ones.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Partner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM partners
             WHERE ($1 = false OR is_active = true)
             ORDER BY sort_order ASC, name ASC"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(active_only)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePartner,
    ) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!(
            "UPDATE partners SET
                name = COALESCE($2, name),
                logo_url = COALESCE($3, logo_url),
                website_url = COALESCE($4, website_url),
                description = COALESCE($5, description),
                sort_order = COALESCE($6, sort_order),
                is_active = COALESCE($7, is_active),
                translations = COALESCE($8, translations)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.logo_url)
            .bind(&input.website_url)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(&input.translations)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
