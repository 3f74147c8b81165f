use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Singleton table; the application only ever touches row id = 1.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub site_name: String,
    #[sea_orm(column_type = "Text")]
    pub site_tagline: String,
    #[sea_orm(column_type = "Text")]
    pub site_description: String,
    #[sea_orm(column_type = "Text")]
    pub site_url: String,

    #[sea_orm(column_type = "Text")]
    pub owner_name: String,
    #[sea_orm(column_type = "Text")]
    pub owner_title: String,
    #[sea_orm(column_type = "Text")]
    pub owner_bio: String,

    #[sea_orm(column_type = "Text")]
    pub active_theme: String,
    #[sea_orm(column_type = "Text")]
    pub default_mode: String,

    #[sea_orm(column_type = "Text")]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub meta_title: String,
    #[sea_orm(column_type = "Text")]
    pub meta_description: String,
    #[sea_orm(column_type = "Text")]
    pub meta_keywords: String,

    #[sea_orm(column_type = "Text")]
    pub google_analytics_id: String,

    #[sea_orm(column_type = "Text")]
    pub github_url: String,
    #[sea_orm(column_type = "Text")]
    pub linkedin_url: String,
    #[sea_orm(column_type = "Text")]
    pub twitter_url: String,
    #[sea_orm(column_type = "Text")]
    pub instagram_url: String,

    pub enable_blog: bool,
    pub enable_testimonials: bool,
    pub enable_contact_form: bool,
    pub enable_animations: bool,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills_expertise: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
