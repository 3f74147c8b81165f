use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 254)]
    pub email: String,

    #[sea_orm(column_type = "Text", string_len = 30)]
    pub phone: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub company: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub subject: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub service_interest_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", string_len = 20)]
    pub status: String,

    #[sea_orm(column_type = "Text", string_len = 45)]
    pub ip_address: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub user_agent: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::service::adapter::outgoing::sea_orm_entity::service_offerings::Entity",
        from = "Column::ServiceInterestId",
        to = "crate::modules::service::adapter::outgoing::sea_orm_entity::service_offerings::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ServiceOfferings,
}

impl
    Related<crate::modules::service::adapter::outgoing::sea_orm_entity::service_offerings::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::ServiceOfferings.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
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
