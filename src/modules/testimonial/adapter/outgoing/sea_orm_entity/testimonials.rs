use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub client_name: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub client_position: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub client_company: String,

    #[sea_orm(column_type = "Text", string_len = 254)]
    pub client_email: String,

    /// Base64 data URL.
    #[sea_orm(column_type = "Text")]
    pub client_photo: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub rating: i16,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub project_id: Option<Uuid>,

    pub is_featured: bool,

    pub is_approved: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::projects::Entity",
        from = "Column::ProjectId",
        to = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Projects,
}

impl Related<crate::modules::portfolio::adapter::outgoing::sea_orm_entity::projects::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.client_name {
            self.client_name = Set(name.trim().to_string());
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
