use chrono::Utc;
use sea_orm::{entity::prelude::*, PaginatorTrait, QueryOrder, QuerySelect, Set};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub popular: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values of a row that does not exist yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRow {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub popular: bool,
}

impl NewRow {
    /// Active model for insertion; `id` is left to the database and `created_at` is stamped now.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            category: Set(self.category),
            image: Set(self.image),
            popular: Set(self.popular),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, row: NewRow) -> Result<Model, ModelError> {
    Ok(row.into_active_model().insert(db).await?)
}

/// Offsets and limits are bound as signed 64-bit integers.
const MAX_BIND: u64 = i64::MAX as u64;

/// Rows in storage order (ascending id) after skipping `skip`, at most `limit`.
pub async fn find_window<C: ConnectionTrait>(db: &C, skip: u64, limit: u64) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Id)
        .offset(skip.min(MAX_BIND))
        .limit(limit.min(MAX_BIND))
        .all(db)
        .await?;
    Ok(rows)
}

/// Every row in storage order.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}
