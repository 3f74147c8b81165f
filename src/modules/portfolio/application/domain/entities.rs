use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    WebApp,
    MobileApp,
    DesktopApp,
    Api,
    Website,
    Other,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "web_app",
            ProjectType::MobileApp => "mobile_app",
            ProjectType::DesktopApp => "desktop_app",
            ProjectType::Api => "api",
            ProjectType::Website => "website",
            ProjectType::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "web_app" => Some(ProjectType::WebApp),
            "mobile_app" => Some(ProjectType::MobileApp),
            "desktop_app" => Some(ProjectType::DesktopApp),
            "api" => Some(ProjectType::Api),
            "website" => Some(ProjectType::Website),
            "other" => Some(ProjectType::Other),
            _ => None,
        }
    }

    pub const ALL: [ProjectType; 6] = [
        ProjectType::WebApp,
        ProjectType::MobileApp,
        ProjectType::DesktopApp,
        ProjectType::Api,
        ProjectType::Website,
        ProjectType::Other,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Published,
    Featured,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
            ProjectStatus::Featured => "featured",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(ProjectStatus::Draft),
            "published" => Some(ProjectStatus::Published),
            "featured" => Some(ProjectStatus::Featured),
            "archived" => Some(ProjectStatus::Archived),
            _ => None,
        }
    }

    /// Drafts and archived projects never leave the admin surface.
    pub fn is_public(&self) -> bool {
        matches!(self, ProjectStatus::Published | ProjectStatus::Featured)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub website_url: String,
    pub proficiency: i16,
    pub years_experience: i16,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Compact category view embedded in project payloads.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// Compact technology view embedded in project payloads.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TechnologyRef {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub category: Option<CategoryRef>,
    pub technologies: Vec<TechnologyRef>,
    /// Base64 data URL, same for every gallery entry.
    pub featured_image: String,
    pub gallery: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub documentation_url: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: String,
    pub team_size: i16,
    pub key_features: Vec<String>,
    pub challenges: String,
    pub solutions: String,
    pub results: String,
    pub meta_title: String,
    pub meta_description: String,
    pub is_featured: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl Project {
    /// Whole months between start and end; open-ended projects count up
    /// to today. `None` when no start date is recorded.
    pub fn duration_months(&self) -> Option<i32> {
        let start = self.start_date?;
        let end = self.end_date.unwrap_or_else(|| Utc::now().date_naive());
        if end < start {
            return Some(0);
        }
        let mut months =
            (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
        if end.day() < start.day() {
            months -= 1;
        }
        Some(months.max(0))
    }
}

/// Aggregate counts for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioStats {
    pub total_projects: i64,
    pub featured_projects: i64,
    pub total_posts: i64,
    pub total_technologies: i64,
    pub total_services: i64,
    pub projects_by_type: Vec<TypeCount>,
    pub top_technologies: Vec<TechnologyRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCount {
    pub project_type: ProjectType,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn project(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: "Demo".to_string(),
            slug: "demo".to_string(),
            description: String::new(),
            detailed_description: String::new(),
            project_type: ProjectType::WebApp,
            status: ProjectStatus::Published,
            category: None,
            technologies: vec![],
            featured_image: String::new(),
            gallery: vec![],
            live_url: String::new(),
            github_url: String::new(),
            documentation_url: String::new(),
            start_date: start,
            end_date: end,
            client: String::new(),
            team_size: 1,
            key_features: vec![],
            challenges: String::new(),
            solutions: String::new(),
            results: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            is_featured: false,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_public_visibility() {
        assert!(ProjectStatus::Published.is_public());
        assert!(ProjectStatus::Featured.is_public());
        assert!(!ProjectStatus::Draft.is_public());
        assert!(!ProjectStatus::Archived.is_public());
    }

    #[test]
    fn project_type_round_trips_wire_names() {
        for project_type in ProjectType::ALL {
            assert_eq!(ProjectType::parse(project_type.as_str()), Some(project_type));
        }
        assert_eq!(ProjectType::parse("webapp"), None);
    }

    #[test]
    fn duration_months_spans_whole_months() {
        let p = project(Some(date(2021, 2, 1)), Some(date(2021, 8, 1)));
        assert_eq!(p.duration_months(), Some(6));
    }

    #[test]
    fn duration_months_without_start_is_none() {
        let p = project(None, Some(date(2021, 8, 1)));
        assert_eq!(p.duration_months(), None);
    }

    #[test]
    fn duration_months_never_negative() {
        let p = project(Some(date(2022, 1, 1)), Some(date(2021, 1, 1)));
        assert_eq!(p.duration_months(), Some(0));
    }
}
