//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for managing user records.
///
/// Provides CRUD operations plus a birth-date range query. Ids are
/// assigned by the repository on insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user and assigns it the next id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Replaces the stored record matching `user.id` with `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, user: User) -> Result<User, AppError>;

    /// Deletes a user by id.
    ///
    /// Returns `Ok(true)` if the user was found and deleted, `Ok(false)`
    /// if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists users with `from <= birth_date <= to`, ordered by id.
    ///
    /// Both bounds are inclusive; callers are responsible for rejecting
    /// inverted ranges before querying.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
