#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use users_api::application::services::UserService;
use users_api::infrastructure::persistence::InMemoryUserRepository;
use users_api::state::AppState;

pub const TEST_MIN_USER_AGE: i32 = 18;

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository, TEST_MIN_USER_AGE));

    AppState::new(user_service)
}

/// A payload that passes full validation (birth date far enough in the
/// past to clear any sane minimum age).
pub fn valid_user_payload() -> Value {
    json!({
        "email": "example@mail.com",
        "first_name": "John",
        "last_name": "Tray",
        "birth_date": "1999-01-02",
        "address": "Main St. Mankato Mississippi 96522",
        "phone_number": "212-456-7890"
    })
}
