use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use tempfile::TempDir;

/// Test context holding a migrated database in its own directory.
pub struct TestContext {
    #[allow(dead_code)] // dir is kept to ensure the database file outlives the test
    pub dir: TempDir,
    pub db: DatabaseConnection,
}

pub async fn setup() -> anyhow::Result<TestContext> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    let dir = tempfile::tempdir()?;
    let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("todos.db").display());
    let db = Database::connect(&db_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(TestContext { dir, db })
}
