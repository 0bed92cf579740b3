use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    routing::get,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::db::{ItemsStorage, SqlitePool, UsersStorage};
use crate::handlers::{items, users};
use crate::service::{ItemService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
    pub users: UserService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            items: ItemService::new(ItemsStorage::new(pool.clone())),
            users: UserService::new(UsersStorage::new(pool)),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/items", get(items::list_items).post(items::create_item))
        .route(
            "/api/items/{id}",
            get(items::get_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
        .route("/api/items/user/{user_id}", get(items::list_user_items))
        .route("/api/users", get(users::list_users).post(users::register_user))
        .route(
            "/api/users/{id}",
            get(users::get_user).delete(users::delete_user),
        )
        .layer(security_header(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(security_header(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(security_header(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn security_header(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, value)
}
