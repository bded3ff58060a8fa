use axum::{
    extract::{Path, Query},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Deserialize;
use service::menu::{service as menu_service, MenuItem, MenuItemPatch, NewMenuItem};
use service::pagination::Window;

use crate::errors::ApiError;
use crate::session::Session;

type NoCache = [(HeaderName, &'static str); 3];

/// Reads must never be served from a cache.
fn no_cache() -> NoCache {
    [
        (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
        (header::PRAGMA, "no-cache"),
        (header::EXPIRES, "0"),
    ]
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    pub skip: Option<u64>,
    /// Maximum rows to return (default 100)
    pub limit: Option<u64>,
}

impl ListQuery {
    fn window(&self) -> Window {
        Window::new(self.skip, self.limit)
    }
}

#[utoipa::path(
    get, path = "/api/menu/", tag = "menu",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of menu items", body = [crate::openapi::MenuItemDoc]),
        (status = 400, description = "Invalid query")
    )
)]
pub async fn list_items(
    Query(q): Query<ListQuery>,
    session: Session,
) -> Result<(NoCache, Json<Vec<MenuItem>>), ApiError> {
    let items = menu_service::list_menu_items(&*session, q.window()).await?;
    Ok((no_cache(), Json(items)))
}

#[utoipa::path(
    get, path = "/api/menu/{id}", tag = "menu",
    params(("id" = i32, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MenuItemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_item(
    Path(id): Path<i32>,
    session: Session,
) -> Result<(NoCache, Json<MenuItem>), ApiError> {
    let item = menu_service::get_menu_item(&*session, id).await?;
    Ok((no_cache(), Json(item)))
}

#[utoipa::path(
    post, path = "/api/menu/", tag = "menu",
    request_body = crate::openapi::NewMenuItemDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MenuItemDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create_item(
    session: Session,
    Json(input): Json<NewMenuItem>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let item = menu_service::create_menu_item(&*session, input).await?;
    session.commit().await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put, path = "/api/menu/{id}", tag = "menu",
    params(("id" = i32, Path, description = "Menu item id")),
    request_body = crate::openapi::MenuItemPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MenuItemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update_item(
    Path(id): Path<i32>,
    session: Session,
    Json(patch): Json<MenuItemPatch>,
) -> Result<Json<MenuItem>, ApiError> {
    let item = menu_service::update_menu_item(&*session, id, patch).await?;
    session.commit().await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete, path = "/api/menu/{id}", tag = "menu",
    params(("id" = i32, Path, description = "Menu item id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_item(Path(id): Path<i32>, session: Session) -> Result<StatusCode, ApiError> {
    menu_service::delete_menu_item(&*session, id).await?;
    session.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
