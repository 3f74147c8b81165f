use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::settings::adapter::outgoing::sea_orm_entity::site_settings::{
    ActiveModel, Entity, Model,
};
use crate::modules::settings::application::domain::entities::{
    ColorMode, SiteSettings, SkillExpertise, Theme,
};
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError, UpdateSettingsData,
};

const SINGLETON_ID: i32 = 1;

#[derive(Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}

fn model_to_settings(model: Model) -> SiteSettings {
    let skills: Vec<SkillExpertise> =
        serde_json::from_value(model.skills_expertise).unwrap_or_default();

    SiteSettings {
        site_name: model.site_name,
        site_tagline: model.site_tagline,
        site_description: model.site_description,
        site_url: model.site_url,
        owner_name: model.owner_name,
        owner_title: model.owner_title,
        owner_bio: model.owner_bio,
        active_theme: Theme::parse(&model.active_theme).unwrap_or(Theme::ElectricNeon),
        default_mode: ColorMode::parse(&model.default_mode).unwrap_or(ColorMode::Auto),
        email: model.email,
        phone: model.phone,
        location: model.location,
        meta_title: model.meta_title,
        meta_description: model.meta_description,
        meta_keywords: model.meta_keywords,
        google_analytics_id: model.google_analytics_id,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        twitter_url: model.twitter_url,
        instagram_url: model.instagram_url,
        enable_blog: model.enable_blog,
        enable_testimonials: model.enable_testimonials,
        enable_contact_form: model.enable_contact_form,
        enable_animations: model.enable_animations,
        skills_expertise: skills,
        updated_at: model.updated_at,
    }
}

fn default_active_model() -> ActiveModel {
    let defaults = SiteSettings::default();
    let now = Utc::now().fixed_offset();
    ActiveModel {
        id: Set(SINGLETON_ID),
        site_name: Set(defaults.site_name),
        site_tagline: Set(defaults.site_tagline),
        site_description: Set(defaults.site_description),
        site_url: Set(defaults.site_url),
        owner_name: Set(defaults.owner_name),
        owner_title: Set(defaults.owner_title),
        owner_bio: Set(defaults.owner_bio),
        active_theme: Set(defaults.active_theme.as_str().to_string()),
        default_mode: Set(defaults.default_mode.as_str().to_string()),
        email: Set(defaults.email),
        phone: Set(defaults.phone),
        location: Set(defaults.location),
        meta_title: Set(defaults.meta_title),
        meta_description: Set(defaults.meta_description),
        meta_keywords: Set(defaults.meta_keywords),
        google_analytics_id: Set(defaults.google_analytics_id),
        github_url: Set(defaults.github_url),
        linkedin_url: Set(defaults.linkedin_url),
        twitter_url: Set(defaults.twitter_url),
        instagram_url: Set(defaults.instagram_url),
        enable_blog: Set(defaults.enable_blog),
        enable_testimonials: Set(defaults.enable_testimonials),
        enable_contact_form: Set(defaults.enable_contact_form),
        enable_animations: Set(defaults.enable_animations),
        skills_expertise: Set(serde_json::json!([])),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn get_or_create(&self) -> Result<SiteSettings, SettingsRepositoryError> {
        if let Some(model) = Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            return Ok(model_to_settings(model));
        }

        let inserted = default_active_model()
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_settings(inserted))
    }

    async fn update(
        &self,
        data: UpdateSettingsData,
    ) -> Result<SiteSettings, SettingsRepositoryError> {
        // First read guarantees the row exists.
        self.get_or_create().await?;

        let mut model = <ActiveModel as Default>::default();
        model.id = Set(SINGLETON_ID);

        if let Some(v) = data.site_name {
            model.site_name = Set(v);
        }
        if let Some(v) = data.site_tagline {
            model.site_tagline = Set(v);
        }
        if let Some(v) = data.site_description {
            model.site_description = Set(v);
        }
        if let Some(v) = data.site_url {
            model.site_url = Set(v);
        }
        if let Some(v) = data.owner_name {
            model.owner_name = Set(v);
        }
        if let Some(v) = data.owner_title {
            model.owner_title = Set(v);
        }
        if let Some(v) = data.owner_bio {
            model.owner_bio = Set(v);
        }
        if let Some(v) = data.active_theme {
            model.active_theme = Set(v.as_str().to_string());
        }
        if let Some(v) = data.default_mode {
            model.default_mode = Set(v.as_str().to_string());
        }
        if let Some(v) = data.email {
            model.email = Set(v);
        }
        if let Some(v) = data.phone {
            model.phone = Set(v);
        }
        if let Some(v) = data.location {
            model.location = Set(v);
        }
        if let Some(v) = data.meta_title {
            model.meta_title = Set(v);
        }
        if let Some(v) = data.meta_description {
            model.meta_description = Set(v);
        }
        if let Some(v) = data.meta_keywords {
            model.meta_keywords = Set(v);
        }
        if let Some(v) = data.google_analytics_id {
            model.google_analytics_id = Set(v);
        }
        if let Some(v) = data.github_url {
            model.github_url = Set(v);
        }
        if let Some(v) = data.linkedin_url {
            model.linkedin_url = Set(v);
        }
        if let Some(v) = data.twitter_url {
            model.twitter_url = Set(v);
        }
        if let Some(v) = data.instagram_url {
            model.instagram_url = Set(v);
        }
        if let Some(v) = data.enable_blog {
            model.enable_blog = Set(v);
        }
        if let Some(v) = data.enable_testimonials {
            model.enable_testimonials = Set(v);
        }
        if let Some(v) = data.enable_contact_form {
            model.enable_contact_form = Set(v);
        }
        if let Some(v) = data.enable_animations {
            model.enable_animations = Set(v);
        }
        if let Some(v) = data.skills_expertise {
            let json = serde_json::to_value(&v)
                .map_err(|e| SettingsRepositoryError::DatabaseError(e.to_string()))?;
            model.skills_expertise = Set(json);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_settings(updated))
    }
}
