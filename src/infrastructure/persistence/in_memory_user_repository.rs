//! In-memory implementation of the user repository.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Process-local user store backed by a `HashMap`.
///
/// Ids are assigned sequentially starting at 1. All data is lost when the
/// process exits; the repository exists to give the service layer a real
/// storage dependency to exercise.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = User::new(
            id,
            new_user.email,
            new_user.first_name,
            new_user.last_name,
            new_user.birth_date,
            new_user.address,
            new_user.phone_number,
        );

        self.users.write().await.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn update(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        match users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(AppError::not_found(
                format!("User with id {} not found", user.id),
                json!({ "id": user.id }),
            )),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.users.write().await.remove(&id).is_some())
    }

    async fn find_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, AppError> {
        let users = self.users.read().await;

        let mut matches: Vec<User> = users
            .values()
            .filter(|u| u.birth_date >= from && u.birth_date <= to)
            .cloned()
            .collect();
        matches.sort_by_key(|u| u.id);

        Ok(matches)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.read().await.len() as i64)
    }
}
