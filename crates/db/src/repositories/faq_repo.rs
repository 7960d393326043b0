//! Repository for the `faq_items` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{CreateFaqItem, FaqItem, UpdateFaqItem};

const COLUMNS: &str =
    "id, question, answer, category, sort_order, is_active, translations, created_at, updated_at";

/// Provides CRUD operations for FAQ items.
pub struct FaqRepo;

impl FaqRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaqItem) -> Result<FaqItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO faq_items (question, answer, category, sort_order, is_active, translations)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true), COALESCE($6, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(&input.translations)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FaqItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faq_items WHERE id = $1");
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active items in display order, optionally within one category.
    pub async fn list_active(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<FaqItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faq_items
             WHERE is_active = true AND ($1::text IS NULL OR category = $1)
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// List every item in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<FaqItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faq_items ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, FaqItem>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaqItem,
    ) -> Result<Option<FaqItem>, sqlx::Error> {
        let query = format!(
            "UPDATE faq_items SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                category = COALESCE($4, category),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active),
                translations = COALESCE($7, translations)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(&input.translations)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faq_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
