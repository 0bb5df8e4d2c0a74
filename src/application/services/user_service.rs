//! User management service.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::date::age_in_years;

/// Service for creating, updating, deleting, and searching users.
///
/// Enforces the birth-date business rules (strictly in the past, minimum
/// age in whole years) before any write reaches the repository.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    min_user_age: i32,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service with the configured minimum age.
    pub fn new(repository: Arc<R>, min_user_age: i32) -> Self {
        Self {
            repository,
            min_user_age,
        }
    }

    /// Creates a user. The repository assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BirthDateRestriction`] if the birth date is not
    /// strictly in the past or the user is younger than the configured
    /// minimum age.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        tracing::debug!(email = %new_user.email, "Creating user");

        self.check_birth_date(new_user.birth_date)?;

        let user = self.repository.insert(new_user).await.inspect_err(|e| {
            tracing::error!(error = ?e, "Error creating user");
        })?;

        Ok(user)
    }

    /// Overwrites all mutable fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `id`.
    /// Returns [`AppError::BirthDateRestriction`] on business-rule
    /// violations (see [`Self::create`]).
    pub async fn update(&self, id: i64, fields: NewUser) -> Result<User, AppError> {
        tracing::debug!(id, "Updating user");

        let mut user = self.get_user_by_id(id).await?;
        user.overwrite(fields);

        self.check_birth_date(user.birth_date)?;

        self.repository.update(user).await.inspect_err(|e| {
            tracing::error!(id, error = ?e, "Error updating user");
        })
    }

    /// Updates only the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// See [`Self::update`].
    pub async fn partial_update(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        tracing::debug!(id, "Partially updating user");

        let mut user = self.get_user_by_id(id).await?;
        user.apply_patch(patch);

        self.check_birth_date(user.birth_date)?;

        self.repository.update(user).await.inspect_err(|e| {
            tracing::error!(id, error = ?e, "Error partially updating user");
        })
    }

    /// Deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `id`.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "Deleting user");

        let deleted = self.repository.delete(id).await.inspect_err(|e| {
            tracing::error!(id, error = ?e, "Error deleting user");
        })?;

        if !deleted {
            return Err(AppError::not_found(
                format!("User with id {id} not found"),
                serde_json::json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Lists users whose birth date falls within `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDateRange`] when `to` precedes `from`.
    /// Equal bounds are allowed.
    pub async fn find_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, AppError> {
        tracing::debug!(%from, %to, "Fetching users by birth date range");

        if to < from {
            return Err(AppError::invalid_date_range(
                "'From' date must be before 'To' date.",
            ));
        }

        self.repository
            .find_by_birth_date_range(from, to)
            .await
            .inspect_err(|e| {
                tracing::error!(error = ?e, "Error fetching users by birth date range");
            })
    }

    /// Number of stored users, reported by the health endpoint.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("User with id {id} not found"),
                serde_json::json!({ "id": id }),
            )
        })
    }

    /// Rejects birth dates that are not strictly in the past or that give
    /// an age below the configured minimum, measured in whole years
    /// against the current UTC date.
    fn check_birth_date(&self, birth_date: NaiveDate) -> Result<(), AppError> {
        let today = Utc::now().date_naive();

        if birth_date >= today {
            return Err(AppError::birth_date_restriction(
                "Birth date must be earlier than the current date.",
            ));
        }

        if age_in_years(birth_date, today) < self.min_user_age {
            return Err(AppError::birth_date_restriction(format!(
                "User must be at least {} years old.",
                self.min_user_age
            )));
        }

        Ok(())
    }
}
