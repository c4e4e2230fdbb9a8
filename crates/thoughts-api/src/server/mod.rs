//! Server setup and initialization
//!
//! Provides the application builder and the server runner.

use std::sync::Arc;

use axum::Router;
use thoughts_common::{AppConfig, AppError};
use thoughts_core::{SnowflakeGenerator, ThoughtRepository};
use thoughts_db::{create_pool, ensure_schema, PgThoughtRepository};
use thoughts_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Connect to PostgreSQL, bootstrap the schema, and create AppState
///
/// # Errors
/// Fails if the store cannot be reached or the schema cannot be created.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = thoughts_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    create_app_state_with_repo(config, Arc::new(PgThoughtRepository::new(pool)))
}

/// Create AppState around an already constructed repository
///
/// # Errors
/// Fails if the service context cannot be assembled.
pub fn create_app_state_with_repo(
    config: AppConfig,
    thought_repo: Arc<dyn ThoughtRepository>,
) -> Result<AppState, AppError> {
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .thought_repo(thought_repo)
        .snowflake_generator(snowflake_generator)
        .build()?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
///
/// # Errors
/// Returns an error if the server stops unexpectedly.
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup fails or the server stops unexpectedly.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.server.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    run_server(app, listener).await
}
