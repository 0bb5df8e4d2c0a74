//! Handler for health check endpoint.

use axum::{extract::State, http::StatusCode, Json};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "Users stored: 3"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;

    let all_healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the user store by counting stored records.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.user_service.count_users().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Users stored: {count}")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {e:?}")),
        },
    }
}
