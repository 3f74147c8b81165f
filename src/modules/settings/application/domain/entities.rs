use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual theme shipped with the frontend. Stored as its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    ElectricNeon,
    SunsetGradient,
    OceanDeep,
    ForestModern,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::ElectricNeon => "electric_neon",
            Theme::SunsetGradient => "sunset_gradient",
            Theme::OceanDeep => "ocean_deep",
            Theme::ForestModern => "forest_modern",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "electric_neon" => Some(Theme::ElectricNeon),
            "sunset_gradient" => Some(Theme::SunsetGradient),
            "ocean_deep" => Some(Theme::OceanDeep),
            "forest_modern" => Some(Theme::ForestModern),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Light,
    Dark,
    Auto,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::Auto => "auto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            "auto" => Some(ColorMode::Auto),
            _ => None,
        }
    }
}

/// One skill record inside `SiteSettings::skills_expertise`. The CV
/// generator groups these by `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SkillExpertise {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub description: String,
}

/// Site-wide configuration. A single row (id = 1) that is created on first
/// read with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_tagline: String,
    pub site_description: String,
    pub site_url: String,
    pub owner_name: String,
    pub owner_title: String,
    pub owner_bio: String,
    pub active_theme: Theme,
    pub default_mode: ColorMode,
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
    pub updated_at: DateTime<FixedOffset>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Portfolio".to_string(),
            site_tagline: String::new(),
            site_description: String::new(),
            site_url: String::new(),
            owner_name: String::new(),
            owner_title: String::new(),
            owner_bio: String::new(),
            active_theme: Theme::ElectricNeon,
            default_mode: ColorMode::Auto,
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            meta_keywords: String::new(),
            google_analytics_id: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            twitter_url: String::new(),
            instagram_url: String::new(),
            enable_blog: true,
            enable_testimonials: true,
            enable_contact_form: true,
            enable_animations: true,
            skills_expertise: Vec::new(),
            updated_at: chrono::Utc::now().fixed_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationItem {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub icon: String,
    pub order: i32,
    pub is_active: bool,
    pub is_external: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorPalette {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub light: PaletteColors,
    pub dark: PaletteColors,
    pub is_active: bool,
    pub is_default: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_wire_names() {
        for theme in [
            Theme::ElectricNeon,
            Theme::SunsetGradient,
            Theme::OceanDeep,
            Theme::ForestModern,
        ] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("neon"), None);
    }

    #[test]
    fn color_mode_round_trips_wire_names() {
        for mode in [ColorMode::Light, ColorMode::Dark, ColorMode::Auto] {
            assert_eq!(ColorMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(ColorMode::parse("system"), None);
    }

    #[test]
    fn default_settings_match_first_boot_values() {
        let settings = SiteSettings::default();
        assert_eq!(settings.site_name, "Portfolio");
        assert_eq!(settings.active_theme, Theme::ElectricNeon);
        assert_eq!(settings.default_mode, ColorMode::Auto);
        assert!(settings.enable_blog);
        assert!(settings.enable_contact_form);
        assert!(settings.skills_expertise.is_empty());
    }
}
