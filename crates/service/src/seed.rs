//! Sample menu used to populate an empty table.

use models::menu_item;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::errors::ServiceError;
use crate::menu::{service::create_menu_item, MenuItem, NewMenuItem};

#[derive(Debug)]
pub enum SeedOutcome {
    /// The table already had rows; nothing was written.
    Skipped { existing: u64 },
    Inserted(Vec<MenuItem>),
}

fn sample(name: &str, description: &str, price: f64, category: &str, image: &str, popular: bool) -> NewMenuItem {
    NewMenuItem {
        name: name.into(),
        description: description.into(),
        price,
        category: category.into(),
        image: Some(image.into()),
        popular,
    }
}

/// The eight fixed sample items.
pub fn sample_menu() -> Vec<NewMenuItem> {
    vec![
        sample("Margherita Pizza", "Fresh tomatoes, mozzarella, and basil", 299.0, "pizza", "/images/pizza.jpg", true),
        sample("Pasta Carbonara", "Creamy pasta with pancetta and parmesan", 249.0, "pasta", "/images/carbo.jpg", true),
        sample("Chocolate Lava Cake", "Warm chocolate cake with a molten center", 179.0, "dessert", "/images/lavas.jpg", true),
        sample("Caesar Salad", "Fresh romaine lettuce with Caesar dressing", 199.0, "salad", "/images/salad.jpg", false),
        sample("Grilled Salmon", "Fresh salmon with lemon butter sauce", 399.0, "main", "/images/salmon.jpg", false),
        sample("Mojito", "Refreshing mint and lime cocktail", 149.0, "drinks", "/images/mojito.jpg", true),
        sample("Classic Burger", "Juicy beef patty with fresh vegetables", 189.0, "main", "/images/burger.jpg", false),
        sample("Veggie Burger", "Plant-based patty with fresh vegetables", 169.0, "main", "/images/burger.jpg", false),
    ]
}

/// Insert [`sample_menu`] in one transaction, only when the table is empty.
pub async fn seed_menu_items(db: &DatabaseConnection) -> Result<SeedOutcome, ServiceError> {
    let txn = db.begin().await?;
    let existing = menu_item::count(&txn).await?;
    if existing > 0 {
        info!(existing, "menu already seeded; skipping");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let mut inserted = Vec::new();
    for item in sample_menu() {
        inserted.push(create_menu_item(&txn, item).await?);
    }
    txn.commit().await?;
    info!(count = inserted.len(), "seeded menu items");
    Ok(SeedOutcome::Inserted(inserted))
}
