//! Repository for the `subscribers` table.

use heptapus_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::subscriber::Subscriber;

const COLUMNS: &str = "id, email, locale, is_active, unsubscribe_token, unsubscribed_at, \
                       created_at, updated_at";

/// Outcome of [`SubscriberRepo::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// A new row was inserted.
    Created,
    /// A previously unsubscribed row was reactivated.
    Reactivated,
    /// The address was already subscribed; nothing changed.
    AlreadyActive,
}

/// Provides newsletter subscription operations.
pub struct SubscriberRepo;

impl SubscriberRepo {
    /// Subscribe `email` (already normalized), reactivating a lapsed row.
    ///
    /// The insert uses `ON CONFLICT DO NOTHING`, so concurrent first signups
    /// for one address yield one `Created` and the rest fall through to the
    /// locked existing-row branch instead of failing on `uq_subscribers_email`.
    pub async fn subscribe(
        pool: &PgPool,
        email: &str,
        locale: &str,
    ) -> Result<(Subscriber, SubscribeOutcome), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO subscribers (email, locale) VALUES ($1, $2)
             ON CONFLICT (email) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Subscriber>(&insert_query)
            .bind(email)
            .bind(locale)
            .fetch_optional(&mut *tx)
            .await?;

        let result = match inserted {
            Some(sub) => (sub, SubscribeOutcome::Created),
            None => {
                let existing_query =
                    format!("SELECT {COLUMNS} FROM subscribers WHERE email = $1 FOR UPDATE");
                let existing = sqlx::query_as::<_, Subscriber>(&existing_query)
                    .bind(email)
                    .fetch_one(&mut *tx)
                    .await?;

                if existing.is_active {
                    (existing, SubscribeOutcome::AlreadyActive)
                } else {
                    let query = format!(
                        "UPDATE subscribers SET
                            is_active = true,
                            unsubscribed_at = NULL,
                            locale = $2,
                            unsubscribe_token = gen_random_uuid()
                         WHERE id = $1
                         RETURNING {COLUMNS}"
                    );
                    let sub = sqlx::query_as::<_, Subscriber>(&query)
                        .bind(existing.id)
                        .bind(locale)
                        .fetch_one(&mut *tx)
                        .await?;
                    (sub, SubscribeOutcome::Reactivated)
                }
            }
        };

        tx.commit().await?;
        Ok(result)
    }

    /// Deactivate the subscriber owning `token`. Returns `true` if a row changed.
    pub async fn unsubscribe(pool: &PgPool, token: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE subscribers SET is_active = false, unsubscribed_at = NOW()
             WHERE unsubscribe_token = $1 AND is_active = true",
        )
        .bind(token)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscribers WHERE email = $1");
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List subscribers, newest first.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Subscriber>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM subscribers
             WHERE ($1 = false OR is_active = true)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(active_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subscribers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
