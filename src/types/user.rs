use serde::{Deserialize, Serialize};

use crate::db::models::DbUser;
use crate::error::ApiError;
use crate::sanitize::clean;

/// Request body for `POST /api/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
}

fn non_empty(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::missing_field(field))
}

impl RegisterPayload {
    pub fn into_registration(self) -> Result<Registration, ApiError> {
        Ok(Registration {
            email: non_empty(self.email, "email")?,
            password: non_empty(self.password, "password")?,
        })
    }
}

/// User as returned to clients. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}

impl From<DbUser> for UserResponse {
    fn from(user: DbUser) -> Self {
        Self {
            id: user.id,
            email: clean(&user.email),
        }
    }
}
