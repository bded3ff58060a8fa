use chrono::{DateTime, FixedOffset};
use models::menu_item::{self, NewRow};
use sea_orm::Set;
use serde::{Deserialize, Deserializer, Serialize};

/// Creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub popular: bool,
}

/// Update payload. Absent fields keep their stored value; `image: null`
/// clears the image, `null` for any other field is rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuItemPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub popular: Option<bool>,
}

/// Wire representation returned by every read and write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub popular: bool,
    pub created_at: DateTime<FixedOffset>,
}

/// Marks a field as sent. Only runs when the key is in the body.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<menu_item::Model> for MenuItem {
    fn from(m: menu_item::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category,
            image: m.image,
            popular: m.popular,
            created_at: m.created_at,
        }
    }
}

impl From<NewMenuItem> for NewRow {
    fn from(n: NewMenuItem) -> Self {
        Self {
            name: n.name,
            description: n.description,
            price: n.price,
            category: n.category,
            image: n.image,
            popular: n.popular,
        }
    }
}

impl MenuItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.image.is_none()
            && self.popular.is_none()
    }

    /// Copy the sent fields onto `am`. `id` and `created_at` are never touched.
    pub fn apply(self, am: &mut menu_item::ActiveModel) {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.description { am.description = Set(v); }
        if let Some(v) = self.price { am.price = Set(v); }
        if let Some(v) = self.category { am.category = Set(v); }
        if let Some(v) = self.image { am.image = Set(v); }
        if let Some(v) = self.popular { am.popular = Set(v); }
    }
}
