use models::menu_item::{self, Entity as MenuItemEntity};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::menu::domain::{MenuItem, MenuItemPatch, NewMenuItem};
use crate::pagination::Window;

const ENTITY: &str = "Menu item";

/// List menu items in storage order.
#[instrument(skip(db))]
pub async fn list_menu_items<C: ConnectionTrait>(db: &C, window: Window) -> Result<Vec<MenuItem>, ServiceError> {
    let rows = menu_item::find_window(db, window.skip, window.limit).await?;
    debug!(count = rows.len(), "listed menu items");
    Ok(rows.into_iter().map(MenuItem::from).collect())
}

/// Every menu item in storage order, for console reporting.
pub async fn list_all_menu_items<C: ConnectionTrait>(db: &C) -> Result<Vec<MenuItem>, ServiceError> {
    let rows = menu_item::find_all(db).await?;
    Ok(rows.into_iter().map(MenuItem::from).collect())
}

/// Get a menu item by id.
pub async fn get_menu_item<C: ConnectionTrait>(db: &C, id: i32) -> Result<MenuItem, ServiceError> {
    MenuItemEntity::find_by_id(id)
        .one(db)
        .await?
        .map(MenuItem::from)
        .ok_or_else(|| ServiceError::not_found(ENTITY))
}

/// Insert a new menu item; the database assigns `id`, `created_at` is stamped here.
#[instrument(skip(db, input), fields(name = %input.name, category = %input.category))]
pub async fn create_menu_item<C: ConnectionTrait>(db: &C, input: NewMenuItem) -> Result<MenuItem, ServiceError> {
    let created = menu_item::create(db, input.into()).await?;
    info!(id = created.id, "created menu item");
    Ok(created.into())
}

/// Overwrite the fields present in `patch`; everything else keeps its stored value.
#[instrument(skip(db, patch))]
pub async fn update_menu_item<C: ConnectionTrait>(db: &C, id: i32, patch: MenuItemPatch) -> Result<MenuItem, ServiceError> {
    let Some(existing) = MenuItemEntity::find_by_id(id).one(db).await? else {
        return Err(ServiceError::not_found(ENTITY));
    };
    if patch.is_empty() {
        return Ok(existing.into());
    }
    let mut am: menu_item::ActiveModel = existing.into();
    patch.apply(&mut am);
    let updated = am.update(db).await?;
    info!(id = updated.id, "updated menu item");
    Ok(updated.into())
}

/// Physically delete a menu item.
#[instrument(skip(db))]
pub async fn delete_menu_item<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = MenuItemEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(ENTITY));
    }
    info!(id, "deleted menu item");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::TransactionTrait;

    fn tea() -> NewMenuItem {
        NewMenuItem {
            name: "Tea".into(),
            description: "Hot".into(),
            price: 50.0,
            category: "drinks".into(),
            image: None,
            popular: false,
        }
    }

    fn named(name: &str) -> NewMenuItem {
        NewMenuItem { name: name.into(), ..tea() }
    }

    #[tokio::test]
    async fn menu_item_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_menu_item(&db, tea()).await?;
        assert!(created.id > 0);
        assert_eq!(created.name, "Tea");
        assert_eq!(created.image, None);
        assert!(!created.popular);

        let found = get_menu_item(&db, created.id).await?;
        assert_eq!(found, created);

        let patch = MenuItemPatch { price: Some(65.0), popular: Some(true), ..Default::default() };
        let updated = update_menu_item(&db, created.id, patch).await?;
        assert_eq!(updated.price, 65.0);
        assert!(updated.popular);
        assert_eq!(updated.name, "Tea");
        assert_eq!(updated.description, "Hot");
        assert_eq!(updated.created_at, created.created_at);

        delete_menu_item(&db, created.id).await?;
        let after = get_menu_item(&db, created.id).await;
        assert!(matches!(after, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        assert!(get_menu_item(&db, 999).await.unwrap_err().is_not_found());
        assert!(update_menu_item(&db, 999, MenuItemPatch::default()).await.unwrap_err().is_not_found());
        assert!(delete_menu_item(&db, 999).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_menu_item(&db, tea()).await?;
        delete_menu_item(&db, created.id).await?;
        assert!(delete_menu_item(&db, created.id).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn patch_can_set_and_clear_image() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_menu_item(&db, tea()).await?;

        let with_image = MenuItemPatch { image: Some(Some("/images/tea.jpg".into())), ..Default::default() };
        let updated = update_menu_item(&db, created.id, with_image).await?;
        assert_eq!(updated.image.as_deref(), Some("/images/tea.jpg"));

        let untouched = update_menu_item(&db, created.id, MenuItemPatch { name: Some("Green Tea".into()), ..Default::default() }).await?;
        assert_eq!(untouched.image.as_deref(), Some("/images/tea.jpg"));
        assert_eq!(untouched.name, "Green Tea");

        let cleared = update_menu_item(&db, created.id, MenuItemPatch { image: Some(None), ..Default::default() }).await?;
        assert_eq!(cleared.image, None);
        assert_eq!(cleared.name, "Green Tea");
        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_returns_current_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_menu_item(&db, tea()).await?;
        let same = update_menu_item(&db, created.id, MenuItemPatch::default()).await?;
        assert_eq!(same, created);
        Ok(())
    }

    #[tokio::test]
    async fn list_applies_window_in_storage_order() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for name in ["one", "two", "three", "four", "five"] {
            create_menu_item(&db, named(name)).await?;
        }

        let all = list_menu_items(&db, Window::default()).await?;
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let page = list_menu_items(&db, Window { skip: 2, limit: 2 }).await?;
        let names: Vec<_> = page.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["three", "four"]);

        let none = list_menu_items(&db, Window { skip: 0, limit: 0 }).await?;
        assert!(none.is_empty());

        let everything = list_all_menu_items(&db).await?;
        assert_eq!(everything, all);
        Ok(())
    }

    #[tokio::test]
    async fn list_accepts_windows_past_signed_range() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for name in ["one", "two", "three"] {
            create_menu_item(&db, named(name)).await?;
        }

        let all = list_menu_items(&db, Window::new(None, Some(u64::MAX))).await?;
        assert_eq!(all.len(), 3);

        let past_end = list_menu_items(&db, Window::new(Some(u64::MAX), None)).await?;
        assert!(past_end.is_empty());

        // unclamped windows are bounded at the storage layer too
        let raw = list_menu_items(&db, Window { skip: 1, limit: u64::MAX }).await?;
        assert_eq!(raw.len(), 2);
        let raw_skip = list_menu_items(&db, Window { skip: u64::MAX, limit: 10 }).await?;
        assert!(raw_skip.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn uncommitted_transaction_is_rolled_back() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        {
            let txn = db.begin().await?;
            create_menu_item(&txn, tea()).await?;
            // dropped without commit
        }
        let all = list_menu_items(&db, Window::default()).await?;
        assert!(all.is_empty());

        let txn = db.begin().await?;
        let created = create_menu_item(&txn, tea()).await?;
        txn.commit().await?;
        assert_eq!(get_menu_item(&db, created.id).await?, created);
        Ok(())
    }
}
