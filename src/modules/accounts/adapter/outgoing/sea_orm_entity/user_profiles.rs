use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub location: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub website: String,

    /// Base64 data URL, stored inline.
    #[sea_orm(column_type = "Text")]
    pub profile_image: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub github_url: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub linkedin_url: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub twitter_url: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub job_title: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub company: String,

    pub experience_years: i16,

    pub email_notifications: bool,

    pub activity_alerts: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(bio) = &self.bio {
            self.bio = Set(bio.trim().to_string());
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
