use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbItem {
    pub id: i64,
    pub user_id: i64,
    pub keyword: String,
    pub category: String,
    pub rating: i64,
    pub cost: i64,
    pub currency: String,
    pub language: String,
    #[sqlx(rename = "type")]
    pub item_type: String,
    pub notes: String,
    pub is_public: i64,
}

/// A user row. `password` holds the PHC-encoded hash, never plaintext.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// Fully validated input for `INSERT INTO items`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub user_id: i64,
    pub keyword: String,
    pub category: String,
    pub rating: i64,
    pub cost: i64,
    pub currency: String,
    pub language: String,
    pub item_type: String,
    pub notes: String,
    pub is_public: i64,
}

/// Column changes for `UPDATE items`; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub user_id: Option<i64>,
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub rating: Option<i64>,
    pub cost: Option<i64>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub item_type: Option<String>,
    pub notes: Option<String>,
    pub is_public: Option<i64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.keyword.is_none()
            && self.category.is_none()
            && self.rating.is_none()
            && self.cost.is_none()
            && self.currency.is_none()
            && self.language.is_none()
            && self.item_type.is_none()
            && self.notes.is_none()
            && self.is_public.is_none()
    }
}
