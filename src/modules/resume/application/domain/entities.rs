use chrono::NaiveDate;
use serde::Serialize;

/// Output layout of the generated curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CvFormat {
    Modern,
    Classic,
    Minimal,
}

impl CvFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CvFormat::Modern => "modern",
            CvFormat::Classic => "classic",
            CvFormat::Minimal => "minimal",
        }
    }

    /// Unknown names fall back to the modern layout.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "classic" => CvFormat::Classic,
            "minimal" => CvFormat::Minimal,
            _ => CvFormat::Modern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CvSection {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Achievements,
    Contact,
}

impl CvSection {
    pub const DEFAULT: [CvSection; 6] = [
        CvSection::Header,
        CvSection::Summary,
        CvSection::Experience,
        CvSection::Education,
        CvSection::Skills,
        CvSection::Contact,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "header" => Some(CvSection::Header),
            "summary" => Some(CvSection::Summary),
            "experience" => Some(CvSection::Experience),
            "education" => Some(CvSection::Education),
            "skills" => Some(CvSection::Skills),
            "achievements" => Some(CvSection::Achievements),
            "contact" => Some(CvSection::Contact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementEntry {
    pub title: String,
    pub organization: String,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

/// Everything the renderers need, assembled from site settings and the
/// professional timeline. Empty optional pieces are substituted with
/// built-in example content so a bare installation still produces a
/// plausible document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurriculumData {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub achievements: Vec<AchievementEntry>,
}

/// Rendered download. `bytes` is either a PDF or, when no renderer is
/// installed, a print-fallback HTML page.
#[derive(Debug, Clone, PartialEq)]
pub struct CvDocument {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}
