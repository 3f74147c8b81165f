use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_offerings")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 150, unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", string_len = 300)]
    pub short_description: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub icon: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub delivery_time: String,

    /// JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    /// JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub process_steps: Json,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub starting_price: Option<Decimal>,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub price_unit: String,

    pub is_active: bool,

    pub is_featured: bool,

    #[sea_orm(column_name = "display_order")]
    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
