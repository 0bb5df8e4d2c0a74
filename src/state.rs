//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::InMemoryUserRepository;

/// Application state shared by all routes.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

impl AppState {
    /// Creates the state from its service dependencies.
    pub fn new(user_service: Arc<UserService<InMemoryUserRepository>>) -> Self {
        Self { user_service }
    }
}
