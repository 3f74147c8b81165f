use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "color_palettes")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 50, unique)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 50, unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text", string_len = 7)]
    pub light_primary: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub light_secondary: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub light_accent: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub light_background: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub light_text: String,

    #[sea_orm(column_type = "Text", string_len = 7)]
    pub dark_primary: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub dark_secondary: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub dark_accent: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub dark_background: String,
    #[sea_orm(column_type = "Text", string_len = 7)]
    pub dark_text: String,

    pub is_active: bool,
    pub is_default: bool,

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
