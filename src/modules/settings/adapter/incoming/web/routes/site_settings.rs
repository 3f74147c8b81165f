use actix_web::{get, put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::settings::application::domain::entities::{
    ColorMode, SiteSettings, SkillExpertise, Theme,
};
use crate::modules::settings::application::ports::outgoing::UpdateSettingsData;
use crate::modules::settings::application::use_cases::get_settings::GetSettingsError;
use crate::modules::settings::application::use_cases::update_settings::UpdateSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SiteSettingsDto {
    pub site_name: String,
    pub site_tagline: String,
    pub site_description: String,
    pub site_url: String,
    pub owner_name: String,
    pub owner_title: String,
    pub owner_bio: String,
    pub active_theme: String,
    pub default_mode: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub google_analytics_id: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub enable_blog: bool,
    pub enable_testimonials: bool,
    pub enable_contact_form: bool,
    pub enable_animations: bool,
    pub skills_expertise: Vec<SkillExpertise>,
}

impl From<SiteSettings> for SiteSettingsDto {
    fn from(s: SiteSettings) -> Self {
        Self {
            site_name: s.site_name,
            site_tagline: s.site_tagline,
            site_description: s.site_description,
            site_url: s.site_url,
            owner_name: s.owner_name,
            owner_title: s.owner_title,
            owner_bio: s.owner_bio,
            active_theme: s.active_theme.as_str().to_string(),
            default_mode: s.default_mode.as_str().to_string(),
            email: s.email,
            phone: s.phone,
            location: s.location,
            meta_title: s.meta_title,
            meta_description: s.meta_description,
            meta_keywords: s.meta_keywords,
            google_analytics_id: s.google_analytics_id,
            github_url: s.github_url,
            linkedin_url: s.linkedin_url,
            twitter_url: s.twitter_url,
            instagram_url: s.instagram_url,
            enable_blog: s.enable_blog,
            enable_testimonials: s.enable_testimonials,
            enable_contact_form: s.enable_contact_form,
            enable_animations: s.enable_animations,
            skills_expertise: s.skills_expertise,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub site_name: Option<String>,
    pub site_tagline: Option<String>,
    pub site_description: Option<String>,
    pub site_url: Option<String>,
    pub owner_name: Option<String>,
    pub owner_title: Option<String>,
    pub owner_bio: Option<String>,
    pub active_theme: Option<String>,
    pub default_mode: Option<String>,
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

/// Public read of the site configuration (used by the frontend shell).
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "settings",
    responses((status = 200, description = "Current site settings", body = SiteSettingsDto))
)]
#[get("/api/settings")]
pub async fn get_site_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get_settings.execute().await {
        Ok(settings) => ApiResponse::success(SiteSettingsDto::from(settings)),
        Err(GetSettingsError::RepositoryError(msg)) => {
            error!("Failed to load site settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/settings")]
pub async fn update_site_settings_handler(
    body: web::Json<UpdateSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();

    let active_theme = match req.active_theme {
        Some(raw) => match Theme::parse(&raw) {
            Some(theme) => Some(theme),
            None => {
                return ApiResponse::bad_request("INVALID_THEME", &format!("unknown theme: {raw}"))
            }
        },
        None => None,
    };

    let default_mode = match req.default_mode {
        Some(raw) => match ColorMode::parse(&raw) {
            Some(mode) => Some(mode),
            None => {
                return ApiResponse::bad_request("INVALID_MODE", &format!("unknown mode: {raw}"))
            }
        },
        None => None,
    };

    let update = UpdateSettingsData {
        site_name: req.site_name,
        site_tagline: req.site_tagline,
        site_description: req.site_description,
        site_url: req.site_url,
        owner_name: req.owner_name,
        owner_title: req.owner_title,
        owner_bio: req.owner_bio,
        active_theme,
        default_mode,
        email: req.email,
        phone: req.phone,
        location: req.location,
        meta_title: req.meta_title,
        meta_description: req.meta_description,
        meta_keywords: req.meta_keywords,
        google_analytics_id: req.google_analytics_id,
        github_url: req.github_url,
        linkedin_url: req.linkedin_url,
        twitter_url: req.twitter_url,
        instagram_url: req.instagram_url,
        enable_blog: req.enable_blog,
        enable_testimonials: req.enable_testimonials,
        enable_contact_form: req.enable_contact_form,
        enable_animations: req.enable_animations,
        skills_expertise: req.skills_expertise,
    };

    match data.settings.update_settings.execute(update).await {
        Ok(settings) => ApiResponse::success(SiteSettingsDto::from(settings)),
        Err(UpdateSettingsError::InvalidEmail(email)) => {
            ApiResponse::bad_request("INVALID_EMAIL", &format!("invalid contact email: {email}"))
        }
        Err(UpdateSettingsError::InvalidSkillLevel { name, level }) => ApiResponse::bad_request(
            "INVALID_SKILL_LEVEL",
            &format!("skill '{name}' has level {level}, expected 0-100"),
        ),
        Err(UpdateSettingsError::RepositoryError(msg)) => {
            error!("Failed to update site settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
