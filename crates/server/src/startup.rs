use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::{self, build_cors};
use crate::state::AppState;

/// Connect the pool and bring the schema up to date when configured to.
pub async fn build_state(config: AppConfig) -> anyhow::Result<AppState> {
    let db = models::db::connect_with_config(&config.database).await?;
    if config.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrated", "database schema up to date");
    }
    Ok(AppState::new(db, config))
}

/// Router with CORS built from the state's configuration
pub fn build_app(state: AppState) -> anyhow::Result<Router> {
    let cors = build_cors(&state.config.cors)?;
    Ok(routes::build_router(state, cors))
}

/// Build the app from `config` and serve it until the listener fails
pub async fn run_with_config(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.server.bind_addr();
    let state = build_state(config).await?;
    let app = build_app(state)?;

    let listener = TcpListener::bind(&addr).await?;
    let local = listener.local_addr()?;
    info!(%local, "menu api listening");
    info!("menu endpoint: http://{local}/api/menu/");
    info!("openapi document: http://{local}/api-docs/openapi.json");
    axum::serve(listener, app).await?;
    Ok(())
}
