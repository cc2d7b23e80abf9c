//! Repository for the `items` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::item::{Item, NewItem, UpdateItem};

/// Column list shared across queries. Storage names are aliased to the
/// field names of [`Item`].
const COLUMNS: &str = "\
    id, type AS kind, title, description, category, location, date, \
    contact_email AS contact, image_url, created_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the stored row including `created_at`.
    pub async fn create(pool: &PgPool, input: &NewItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items \
                (id, type, title, description, category, location, date, contact_email, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.id)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(Json(input.location))
            .bind(input.date)
            .bind(&input.contact)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an item by ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every item, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Apply a patch in one statement. Only fields present in `patch` are
    /// changed; the nullable columns are guarded by a "provided" flag so an
    /// explicit `null` clears them.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        patch: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let description_provided = patch.description.is_some();
        let description = patch.description.as_ref().and_then(|v| v.as_deref());
        let contact_provided = patch.contact.is_some();
        let contact = patch.contact.as_ref().and_then(|v| v.as_deref());
        let image_url_provided = patch.image_url.is_some();
        let image_url = patch.image_url.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE items SET \
                 title         = COALESCE($2, title), \
                 description   = CASE WHEN $3 THEN $4 ELSE description END, \
                 location      = COALESCE($5, location), \
                 contact_email = CASE WHEN $6 THEN $7 ELSE contact_email END, \
                 image_url     = CASE WHEN $8 THEN $9 ELSE image_url END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(description_provided)
            .bind(description)
            .bind(patch.location.map(Json))
            .bind(contact_provided)
            .bind(contact)
            .bind(image_url_provided)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
