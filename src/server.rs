//! HTTP server initialization and runtime setup.
//!
//! Wires the repository, service, and router together and runs the Axum
//! server lifecycle.

use crate::application::services::UserService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUserRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory user store
/// - User service with the configured minimum age
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryUserRepository::new());
    tracing::info!("In-memory user store initialized");

    let user_service = Arc::new(UserService::new(repository, config.min_user_age));

    let state = AppState::new(user_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
