use std::sync::Arc;

use configs::AppConfig;
use sea_orm::DatabaseConnection;

/// Built once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config) }
    }
}
