

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Fresh in-memory SQLite database with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig::with_url("sqlite::memory:");
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
