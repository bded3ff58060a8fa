use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::seed::{seed_menu_items, SeedOutcome};
use tracing::{error, info};

async fn run() -> anyhow::Result<()> {
    let config = configs::AppConfig::load_and_validate()?;
    let db = models::db::connect_with_config(&config.database).await?;
    migration::Migrator::up(&db, None).await?;

    info!(event = "seed_start", "seeding database with menu items");
    match seed_menu_items(&db).await? {
        SeedOutcome::Skipped { existing } => {
            println!("Database already has {existing} menu items. Skipping seed.");
        }
        SeedOutcome::Inserted(items) => {
            println!("Added {} menu items to the database:", items.len());
            for item in &items {
                println!("  - {} (₹{:.2}) - {}", item.name, item.price, item.category);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    init_logging(LogFormat::from_env());

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(event = "seed_failed", error = %e, "error seeding database");
            std::process::ExitCode::FAILURE
        }
    }
}
