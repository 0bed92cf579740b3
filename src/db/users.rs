use crate::db::models::DbUser;
use crate::db::sqlite::SqlitePool;
use crate::error::ApiError;

#[derive(Clone)]
pub struct UsersStorage {
    pool: SqlitePool,
}

impl UsersStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<DbUser>, ApiError> {
        let rows = sqlx::query_as::<_, DbUser>("SELECT id, email, password FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbUser>, ApiError> {
        let row =
            sqlx::query_as::<_, DbUser>("SELECT id, email, password FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    pub async fn has_user_with_email(&self, email: &str) -> Result<bool, ApiError> {
        let rec: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rec.is_some())
    }

    /// Insert a user whose password is already hashed.
    ///
    /// A concurrent registration of the same email trips the UNIQUE constraint;
    /// callers see it as `sqlx::Error::Database` with `is_unique_violation()`.
    pub async fn insert(&self, email: &str, password_hash: &str) -> Result<DbUser, ApiError> {
        let row = sqlx::query_as::<_, DbUser>(
            "INSERT INTO users (email, password) VALUES (?, ?) RETURNING id, email, password",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
