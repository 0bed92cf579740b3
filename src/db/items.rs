use crate::db::models::{DbItem, ItemPatch, NewItem};
use crate::db::sqlite::SqlitePool;
use crate::error::ApiError;
use sqlx::{QueryBuilder, Sqlite};

const ITEM_COLUMNS: &str =
    "id, user_id, keyword, category, rating, cost, currency, language, type, notes, is_public";

#[derive(Clone)]
pub struct ItemsStorage {
    pool: SqlitePool,
}

impl ItemsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<DbItem>, ApiError> {
        let rows = sqlx::query_as::<_, DbItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbItem>, ApiError> {
        let row = sqlx::query_as::<_, DbItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<DbItem>, ApiError> {
        let rows = sqlx::query_as::<_, DbItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE user_id = ? ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a row and return it as stored, including the generated id.
    pub async fn insert(&self, item: NewItem) -> Result<DbItem, ApiError> {
        let row = sqlx::query_as::<_, DbItem>(&format!(
            r#"INSERT INTO items (
                user_id, keyword, category, rating, cost,
                currency, language, type, notes, is_public
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(item.user_id)
        .bind(item.keyword)
        .bind(item.category)
        .bind(item.rating)
        .bind(item.cost)
        .bind(item.currency)
        .bind(item.language)
        .bind(item.item_type)
        .bind(item.notes)
        .bind(item.is_public)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply the columns set in `patch` and return the merged row.
    /// `None` means no row with that id exists. `patch` must not be empty.
    pub async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<DbItem>, ApiError> {
        debug_assert!(!patch.is_empty(), "empty patch has no SET clause");

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE items SET ");
        let mut set = qb.separated(", ");
        if let Some(v) = patch.user_id {
            set.push("user_id = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.keyword {
            set.push("keyword = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.category {
            set.push("category = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.rating {
            set.push("rating = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.cost {
            set.push("cost = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.currency {
            set.push("currency = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.language {
            set.push("language = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.item_type {
            set.push("type = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.notes {
            set.push("notes = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.is_public {
            set.push("is_public = ").push_bind_unseparated(v);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING ").push(ITEM_COLUMNS);

        let row = qb
            .build_query_as::<DbItem>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        let res = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
