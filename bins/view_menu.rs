use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use service::menu::{report::group_by_category, service::list_all_menu_items, MenuItem};
use tracing::error;

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "--------------------------------------------------------------------------------";

fn print_item(item: &MenuItem) {
    println!("ID: {}", item.id);
    println!("Name: {}", item.name);
    println!("Description: {}", item.description);
    println!("Price: ₹{:.2}", item.price);
    println!("Category: {}", item.category);
    println!("Popular: {}", if item.popular { "yes" } else { "no" });
    println!("Image: {}", item.image.as_deref().unwrap_or("-"));
    println!("Created: {}", item.created_at.to_rfc3339());
    println!("{THIN_RULE}\n");
}

async fn run() -> anyhow::Result<()> {
    let config = configs::AppConfig::load_and_validate()?;
    let db = models::db::connect_with_config(&config.database).await?;

    let items = list_all_menu_items(&db).await?;
    if items.is_empty() {
        println!("No menu items found in database!");
        println!("\nRun `cargo run --bin seed` to add sample data.");
        return Ok(());
    }

    println!("\n{RULE}");
    println!("MENU ITEMS IN DATABASE ({} items)", items.len());
    println!("{RULE}\n");
    for item in &items {
        print_item(item);
    }

    println!("\n{RULE}");
    println!("SUMMARY BY CATEGORY");
    println!("{RULE}\n");
    for group in group_by_category(&items) {
        println!("{}: {} items", group.category.to_uppercase(), group.names.len());
        for name in &group.names {
            println!("  * {name}");
        }
        println!();
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
            error!(event = "view_failed", error = %e, "error reading menu items");
            std::process::ExitCode::FAILURE
        }
    }
}
