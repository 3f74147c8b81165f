use crate::modules::settings::application::domain::entities::{
    ColorMode, SiteSettings, SkillExpertise, Theme,
};
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsData {
    pub site_name: Option<String>,
    pub site_tagline: Option<String>,
    pub site_description: Option<String>,
    pub site_url: Option<String>,
    pub owner_name: Option<String>,
    pub owner_title: Option<String>,
    pub owner_bio: Option<String>,
    pub active_theme: Option<Theme>,
    pub default_mode: Option<ColorMode>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub google_analytics_id: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub enable_blog: Option<bool>,
    pub enable_testimonials: Option<bool>,
    pub enable_contact_form: Option<bool>,
    pub enable_animations: Option<bool>,
    pub skills_expertise: Option<Vec<SkillExpertise>>,
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns the singleton row, inserting it with defaults when missing.
    async fn get_or_create(&self) -> Result<SiteSettings, SettingsRepositoryError>;

    async fn update(
        &self,
        data: UpdateSettingsData,
    ) -> Result<SiteSettings, SettingsRepositoryError>;
}
