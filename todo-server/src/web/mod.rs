use axum::Router;
use migration::MigratorTrait;
use sea_orm::Database;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::todo::TodoService;
use crate::todo::web::{TodoState, create_todo_router};

/// Builds the application router around an already migrated database.
pub fn build_app(db: Arc<sea_orm::DatabaseConnection>) -> Router {
    let todo_state = Arc::new(TodoState { db });
    let todo_router = create_todo_router(todo_state);

    Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(todo_router)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    if let Some(dir) = sqlite_parent_dir(&config.database_url) {
        std::fs::create_dir_all(dir)?;
    }

    let db = Database::connect(&config.database_url).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    TodoService::new(&db).seed_sample_todos().await?;

    let server_address = format!("{}:{}", &config.host, &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let app = build_app(Arc::new(db));
    axum::serve(listener, app).await?;
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}

/// Returns the directory that must exist before SQLite can create the database file.
fn sqlite_parent_dir(database_url: &str) -> Option<&Path> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next()?;
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}
