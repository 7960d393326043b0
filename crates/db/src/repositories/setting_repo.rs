//! Repository for the `settings` key/value table.

use sqlx::PgPool;

use crate::models::setting::{Setting, UpsertSetting};

const COLUMNS: &str = "key, value, is_public, created_at, updated_at";

pub struct SettingRepo;

impl SettingRepo {
    /// List every setting ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key ASC");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// List settings flagged as safe to expose on the public site.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM settings WHERE is_public = true ORDER BY key ASC");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    pub async fn find(pool: &PgPool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE key = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update every entry in one transaction.
    pub async fn upsert_many(
        pool: &PgPool,
        entries: &[UpsertSetting],
    ) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (key, value, is_public)
             VALUES ($1, $2, COALESCE($3, false))
             ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                is_public = COALESCE($3, settings.is_public)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let setting = sqlx::query_as::<_, Setting>(&query)
                .bind(&entry.key)
                .bind(&entry.value)
                .bind(entry.is_public)
                .fetch_one(&mut *tx)
                .await?;
            saved.push(setting);
        }
        tx.commit().await?;
        Ok(saved)
    }

    pub async fn delete(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM settings WHERE key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
