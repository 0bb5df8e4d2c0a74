//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod users;

pub use health::health_handler;
pub use users::{
    create_user_handler, delete_user_handler, partial_update_user_handler, search_users_handler,
    update_user_handler,
};
