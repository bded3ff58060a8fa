use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct WelcomeResponse { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub detail: String }

#[derive(ToSchema)]
pub struct MenuItemDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub popular: bool,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct NewMenuItemDoc {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    /// Defaults to false
    pub popular: Option<bool>,
}

/// Every field is optional; omitted fields keep their stored value.
#[derive(ToSchema)]
pub struct MenuItemPatchDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    /// `null` clears the image
    pub image: Option<String>,
    pub popular: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Menu API"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::menu::list_items,
        crate::routes::menu::get_item,
        crate::routes::menu::create_item,
        crate::routes::menu::update_item,
        crate::routes::menu::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            WelcomeResponse,
            ErrorDoc,
            MenuItemDoc,
            NewMenuItemDoc,
            MenuItemPatchDoc,
        )
    ),
    tags(
        (name = "meta"),
        (name = "menu")
    )
)]
pub struct ApiDoc;
