//! Handlers for user management endpoints (create, update, delete, search).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::user::{BirthDateRangeQuery, UserPatchRequest, UserRequest, UserResponse};
use crate::api::extract::ApiJson;
use crate::domain::entities::{NewUser, UserPatch};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::date::parse_date;

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "example@mail.com",
///   "first_name": "John",
///   "last_name": "Smith",
///   "birth_date": "2000-01-11",
///   "address": "Main St. Mankato Mississippi 96522",  // optional
///   "phone_number": "212-456-7890"                     // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on field validation failures, unparseable
/// birth dates, and birth-date rule violations.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state.user_service.create(to_new_user(payload)?).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Overwrites every mutable field of an existing user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the id, 400 Bad Request on
/// validation or birth-date rule failures.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state.user_service.update(id, to_new_user(payload)?).await?;

    Ok(Json(user.into()))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PATCH /users/{id}`
///
/// # Request Body
///
/// Any subset of the full payload. Absent and blank fields are left
/// unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the id, 400 Bad Request on
/// validation or birth-date rule failures.
pub async fn partial_update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserPatchRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let patch = UserPatch {
        email: non_blank(payload.email),
        first_name: non_blank(payload.first_name),
        last_name: non_blank(payload.last_name),
        birth_date: non_blank(payload.birth_date)
            .map(|raw| parse_date(&raw))
            .transpose()?,
        address: non_blank(payload.address),
        phone_number: non_blank(payload.phone_number),
    };

    let user = state.user_service.partial_update(id, patch).await?;

    Ok(Json(user.into()))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the id.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(id).await?;

    Ok(StatusCode::OK)
}

/// Searches users by birth date range.
///
/// # Endpoint
///
/// `GET /users?from=2000-01-01&to=2000-05-09`
///
/// Both bounds are inclusive; equal bounds are allowed.
///
/// # Errors
///
/// Returns 400 Bad Request on unparseable dates or when `to` precedes
/// `from`.
pub async fn search_users_handler(
    State(state): State<AppState>,
    Query(query): Query<BirthDateRangeQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let from = parse_date(&query.from)?;
    let to = parse_date(&query.to)?;

    let users = state
        .user_service
        .find_by_birth_date_range(from, to)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Converts a validated full payload into the domain input, parsing the
/// birth date string.
fn to_new_user(payload: UserRequest) -> Result<NewUser, AppError> {
    Ok(NewUser {
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
        birth_date: parse_date(&payload.birth_date)?,
        address: payload.address,
        phone_number: payload.phone_number,
    })
}

/// Maps absent and blank wire values to "unchanged".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
