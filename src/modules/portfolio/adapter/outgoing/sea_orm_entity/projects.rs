use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", string_len = 200, unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub detailed_description: String,

    #[sea_orm(column_type = "Text", string_len = 20)]
    pub project_type: String,

    #[sea_orm(column_type = "Text", string_len = 20)]
    pub status: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub category_id: Option<Uuid>,

    /// Base64 data URL.
    #[sea_orm(column_type = "Text")]
    pub featured_image: String,

    /// JSON array of base64 data URLs.
    #[sea_orm(column_type = "JsonBinary")]
    pub gallery: Json,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub live_url: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub github_url: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub documentation_url: String,

    pub start_date: Option<Date>,
    pub end_date: Option<Date>,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub client: String,

    pub team_size: i16,

    /// JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub key_features: Json,

    #[sea_orm(column_type = "Text")]
    pub challenges: String,

    #[sea_orm(column_type = "Text")]
    pub solutions: String,

    #[sea_orm(column_type = "Text")]
    pub results: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub meta_title: String,

    #[sea_orm(column_type = "Text", string_len = 300)]
    pub meta_description: String,

    pub is_featured: bool,

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

    #[sea_orm(
        has_many = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::project_technologies::Entity"
    )]
    ProjectTechnologies,
}

impl Related<crate::modules::portfolio::adapter::outgoing::sea_orm_entity::categories::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

// Many-to-many: projects <-> technologies via project_technologies
impl Related<crate::modules::portfolio::adapter::outgoing::sea_orm_entity::technologies::Entity>
    for Entity
{
    fn to() -> RelationDef {
        crate::modules::portfolio::adapter::outgoing::sea_orm_entity::project_technologies::Relation::Technologies
            .def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            crate::modules::portfolio::adapter::outgoing::sea_orm_entity::project_technologies::Relation::Projects
                .def()
                .rev(),
        )
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
