use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_activities")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub user_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", string_len = 30)]
    pub action: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub description: String,

    #[sea_orm(column_type = "Text", string_len = 45)]
    pub ip_address: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub user_agent: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub referer: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub metadata: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
