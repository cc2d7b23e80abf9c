//! Repository for the `subscriptions` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::subscription::{Subscription, UpsertSubscription};

/// Column list for `subscriptions` queries. A NULL `preferences` column
/// reads back as an empty object.
const COLUMNS: &str =
    "id, fcm_token, email, COALESCE(preferences, '{}'::jsonb) AS preferences, created_at";

/// Provides CRUD operations for push-notification subscriptions.
pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Insert or overwrite the subscription for `input.fcm_token`.
    ///
    /// Uses `ON CONFLICT (fcm_token) DO UPDATE` to guarantee one row per
    /// token; `id` and `created_at` of an existing row are preserved.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertSubscription,
    ) -> Result<Subscription, sqlx::Error> {
        let query = format!(
            "INSERT INTO subscriptions (fcm_token, email, preferences) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (fcm_token) DO UPDATE \
             SET email = EXCLUDED.email, \
                 preferences = EXCLUDED.preferences \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&query)
            .bind(&input.fcm_token)
            .bind(&input.email)
            .bind(Json(&input.preferences))
            .fetch_one(pool)
            .await
    }

    /// Find a subscription by its device token.
    pub async fn find_by_token(
        pool: &PgPool,
        fcm_token: &str,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscriptions WHERE fcm_token = $1");
        sqlx::query_as::<_, Subscription>(&query)
            .bind(fcm_token)
            .fetch_optional(pool)
            .await
    }

    /// List all subscriptions in registration order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscriptions ORDER BY created_at, id");
        sqlx::query_as::<_, Subscription>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete the subscription for a token. Returns `true` if a row was removed.
    pub async fn delete_by_token(pool: &PgPool, fcm_token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE fcm_token = $1")
            .bind(fcm_token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
