//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, partial_update_user_handler, search_users_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// User management routes.
///
/// # Endpoints
///
/// - `POST   /users`       - Create a user
/// - `GET    /users`       - Search users by birth date range (`?from=&to=`)
/// - `PUT    /users/{id}`  - Overwrite a user
/// - `PATCH  /users/{id}`  - Partially update a user
/// - `DELETE /users/{id}`  - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(create_user_handler).get(search_users_handler),
        )
        .route(
            "/users/{id}",
            put(update_user_handler)
                .patch(partial_update_user_handler)
                .delete(delete_user_handler),
        )
}
