use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", string_len = 200, unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub excerpt: String,

    /// Markdown body.
    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub author_id: Option<Uuid>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub category_id: Option<Uuid>,

    /// Comma-separated, lowercased.
    #[sea_orm(column_type = "Text", string_len = 500)]
    pub tags: String,

    #[sea_orm(column_type = "Text", string_len = 20)]
    pub status: String,

    /// Base64 data URL.
    #[sea_orm(column_type = "Text")]
    pub featured_image: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub meta_title: String,

    #[sea_orm(column_type = "Text", string_len = 300)]
    pub meta_description: String,

    pub views_count: i64,

    pub reading_time: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub published_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::categories::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::categories::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Categories,
}

impl Related<crate::modules::portfolio::adapter::outgoing::sea_orm_entity::categories::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
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
