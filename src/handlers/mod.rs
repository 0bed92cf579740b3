pub mod items;
pub mod users;

use axum::http::{HeaderValue, Uri, header};

use crate::error::ApiError;

/// Numeric path id; anything else cannot match a row and is reported as 404.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound("Invalid id".to_string()))
}

/// `Location` header pointing at a freshly created child of the request path.
pub(crate) fn location_of(uri: &Uri, id: i64) -> [(header::HeaderName, HeaderValue); 1] {
    let path = format!("{}/{}", uri.path().trim_end_matches('/'), id);
    let value = HeaderValue::from_str(&path).unwrap_or_else(|_| HeaderValue::from_static("/"));
    [(header::LOCATION, value)]
}
