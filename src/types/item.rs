use serde::{Deserialize, Serialize};

use crate::db::models::{DbItem, ItemPatch, NewItem};
use crate::error::ApiError;
use crate::sanitize::clean;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPublicFlag {
    Bool(bool),
    Int(i64),
}

/// `is_public` as sent by clients: `1`/`0` or `true`/`false`. Any other
/// integer fails deserialization, which the JSON extractor reports as 400.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawPublicFlag")]
pub struct PublicFlag(bool);

impl TryFrom<RawPublicFlag> for PublicFlag {
    type Error = String;

    fn try_from(raw: RawPublicFlag) -> Result<Self, Self::Error> {
        match raw {
            RawPublicFlag::Bool(b) => Ok(PublicFlag(b)),
            RawPublicFlag::Int(0) => Ok(PublicFlag(false)),
            RawPublicFlag::Int(1) => Ok(PublicFlag(true)),
            RawPublicFlag::Int(i) => Err(format!(
                "is_public must be 0, 1, true or false, got {i}"
            )),
        }
    }
}

impl From<PublicFlag> for i64 {
    fn from(flag: PublicFlag) -> Self {
        flag.0 as i64
    }
}

/// Request body for `POST /api/items` and `PATCH /api/items/{id}`.
///
/// Every field is optional at the JSON level; create requires all of them,
/// update requires at least one. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPayload {
    pub user_id: Option<i64>,
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub rating: Option<i64>,
    pub cost: Option<i64>,
    pub currency: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub notes: Option<String>,
    pub is_public: Option<PublicFlag>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::missing_field(field))
}

impl ItemPayload {
    /// Presence check for creation; reports the first missing field.
    pub fn into_new_item(self) -> Result<NewItem, ApiError> {
        Ok(NewItem {
            user_id: required(self.user_id, "user_id")?,
            keyword: required(self.keyword, "keyword")?,
            category: required(self.category, "category")?,
            rating: required(self.rating, "rating")?,
            cost: required(self.cost, "cost")?,
            currency: required(self.currency, "currency")?,
            language: required(self.language, "language")?,
            item_type: required(self.item_type, "type")?,
            notes: required(self.notes, "notes")?,
            is_public: required(self.is_public, "is_public")?.into(),
        })
    }

    pub fn into_patch(self) -> ItemPatch {
        ItemPatch {
            user_id: self.user_id,
            keyword: self.keyword,
            category: self.category,
            rating: self.rating,
            cost: self.cost,
            currency: self.currency,
            language: self.language,
            item_type: self.item_type,
            notes: self.notes,
            is_public: self.is_public.map(Into::into),
        }
    }
}

/// Item as returned to clients, with every text field passed through [`clean`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: i64,
    pub user_id: i64,
    pub keyword: String,
    pub category: String,
    pub rating: i64,
    pub cost: i64,
    pub currency: String,
    pub language: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub notes: String,
    pub is_public: i64,
}

impl From<DbItem> for ItemResponse {
    fn from(item: DbItem) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            keyword: clean(&item.keyword),
            category: clean(&item.category),
            rating: item.rating,
            cost: item.cost,
            currency: clean(&item.currency),
            language: clean(&item.language),
            item_type: clean(&item.item_type),
            notes: clean(&item.notes),
            is_public: item.is_public,
        }
    }
}
