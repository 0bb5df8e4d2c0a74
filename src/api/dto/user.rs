//! DTOs for user management endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::entities::User;
use crate::utils::date::format_date;

/// Full user payload for `POST /users` and `PUT /users/{id}`.
///
/// Required fields default to empty when absent so that a missing field
/// fails the non-blank rule with a per-field message instead of a
/// deserialization error. Any `id` property in the body is ignored; ids
/// are server-assigned (create) or path-derived (update).
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email must not be blank"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "First name must not be blank"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Last name must not be blank"))]
    pub last_name: String,

    /// Birth date as a `yyyy-MM-dd` string; parsed after field validation.
    #[serde(default)]
    #[validate(length(min = 1, message = "Birth date must not be blank"))]
    pub birth_date: String,

    pub address: Option<String>,

    pub phone_number: Option<String>,
}

/// Partial user payload for `PATCH /users/{id}`.
///
/// Every field is optional. Absent and blank fields are left unchanged;
/// a present, non-blank email must still be well-formed.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPatchRequest {
    #[validate(custom(function = validate_email_unless_blank))]
    pub email: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Birth date as a `yyyy-MM-dd` string; parsed when non-blank.
    pub birth_date: Option<String>,

    pub address: Option<String>,

    pub phone_number: Option<String>,
}

/// JSON representation of a user returned by every mutating endpoint and
/// the range search.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: format_date(user.birth_date),
            address: user.address,
            phone_number: user.phone_number,
        }
    }
}

/// Query parameters for `GET /users?from=&to=`.
#[derive(Debug, Deserialize)]
pub struct BirthDateRangeQuery {
    pub from: String,
    pub to: String,
}

/// Blank means "leave unchanged" in partial mode, so only a non-blank
/// value has to look like an email address.
fn validate_email_unless_blank(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email format".into()))
    }
}
