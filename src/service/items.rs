use crate::db::ItemsStorage;
use crate::error::ApiError;
use crate::types::item::{ItemPayload, ItemResponse};
use tracing::{debug, info};

/// Item use cases: presence checks, one storage call, serialization.
#[derive(Clone)]
pub struct ItemService {
    storage: ItemsStorage,
}

impl ItemService {
    pub fn new(storage: ItemsStorage) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<ItemResponse>, ApiError> {
        let rows = self.storage.list().await?;
        debug!(count = rows.len(), "listed items");
        Ok(rows.into_iter().map(ItemResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<ItemResponse, ApiError> {
        self.storage
            .get_by_id(id)
            .await?
            .map(ItemResponse::from)
            .ok_or_else(item_not_found)
    }

    /// All items owned by `user_id`. An empty result is reported as not found.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<ItemResponse>, ApiError> {
        let rows = self.storage.list_by_user(user_id).await?;
        if rows.is_empty() {
            return Err(item_not_found());
        }
        Ok(rows.into_iter().map(ItemResponse::from).collect())
    }

    pub async fn create(&self, payload: ItemPayload) -> Result<ItemResponse, ApiError> {
        let new_item = payload.into_new_item()?;
        let row = self.storage.insert(new_item).await?;
        info!(id = row.id, user_id = row.user_id, "item created");
        Ok(row.into())
    }

    pub async fn update(&self, id: i64, payload: ItemPayload) -> Result<ItemResponse, ApiError> {
        let patch = payload.into_patch();
        if patch.is_empty() {
            // a missing row wins over an empty body
            self.storage
                .get_by_id(id)
                .await?
                .ok_or_else(item_not_found)?;
            return Err(ApiError::BadRequest(
                "Request body must contain at least one item field".to_string(),
            ));
        }
        let row = self
            .storage
            .update(id, patch)
            .await?
            .ok_or_else(item_not_found)?;
        info!(id = row.id, "item updated");
        Ok(row.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        match self.storage.delete(id).await? {
            0 => Err(item_not_found()),
            _ => {
                info!(id, "item deleted");
                Ok(())
            }
        }
    }
}

fn item_not_found() -> ApiError {
    ApiError::NotFound("Item doesn't exist".to_string())
}
