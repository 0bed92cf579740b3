use crate::db::UsersStorage;
use crate::error::ApiError;
use crate::service::password::{hash_password_blocking, validate_password};
use crate::types::user::{RegisterPayload, UserResponse};
use tracing::{info, warn};

const USERNAME_TAKEN: &str = "Username already taken";

#[derive(Clone)]
pub struct UserService {
    storage: UsersStorage,
}

impl UserService {
    pub fn new(storage: UsersStorage) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, ApiError> {
        let rows = self.storage.list().await?;
        Ok(rows.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<UserResponse, ApiError> {
        self.storage
            .get_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(user_not_found)
    }

    /// Validate, reject duplicates, hash, insert.
    pub async fn register(&self, payload: RegisterPayload) -> Result<UserResponse, ApiError> {
        let registration = payload.into_registration()?;
        if let Some(msg) = validate_password(&registration.password) {
            return Err(ApiError::BadRequest(msg.to_string()));
        }

        if self
            .storage
            .has_user_with_email(&registration.email)
            .await?
        {
            return Err(ApiError::BadRequest(USERNAME_TAKEN.to_string()));
        }

        let hashed = hash_password_blocking(registration.password).await?;
        let user = self
            .storage
            .insert(&registration.email, &hashed)
            .await
            .map_err(username_conflict)?;
        info!(id = user.id, "user registered");
        Ok(user.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        match self.storage.delete(id).await? {
            0 => Err(user_not_found()),
            _ => {
                info!(id, "user deleted");
                Ok(())
            }
        }
    }
}

/// A registration that lost the race past the existence check trips the
/// UNIQUE constraint on `email`; report it like any other duplicate.
fn username_conflict(err: ApiError) -> ApiError {
    match err {
        ApiError::Database(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            warn!("concurrent registration for the same email");
            ApiError::BadRequest(USERNAME_TAKEN.to_string())
        }
        other => other,
    }
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("User doesn't exist".to_string())
}
