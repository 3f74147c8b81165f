use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sessions older than this (by last activity) stop counting as current.
pub const SESSION_CURRENT_WINDOW_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub bio: String,
    pub location: String,
    pub website: String,
    /// Base64 data URL.
    pub profile_image: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub job_title: String,
    pub company: String,
    pub experience_years: i16,
    pub email_notifications: bool,
    pub activity_alerts: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginAttempt {
    pub id: Uuid,
    pub username: String,
    pub ip_address: String,
    pub user_agent: String,
    pub success: bool,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_key: String,
    pub ip_address: String,
    pub user_agent: String,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
    pub last_activity: DateTime<FixedOffset>,
}

impl UserSession {
    /// Active and touched within the last half hour.
    pub fn is_current(&self, now: DateTime<FixedOffset>) -> bool {
        self.is_active
            && now - self.last_activity <= Duration::minutes(SESSION_CURRENT_WINDOW_MINUTES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Login,
    Logout,
    ProfileUpdate,
    PasswordChange,
    ContactForm,
    ProjectView,
    BlogView,
    Search,
    Download,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Login => "login",
            ActivityAction::Logout => "logout",
            ActivityAction::ProfileUpdate => "profile_update",
            ActivityAction::PasswordChange => "password_change",
            ActivityAction::ContactForm => "contact_form",
            ActivityAction::ProjectView => "project_view",
            ActivityAction::BlogView => "blog_view",
            ActivityAction::Search => "search",
            ActivityAction::Download => "download",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "login" => Some(ActivityAction::Login),
            "logout" => Some(ActivityAction::Logout),
            "profile_update" => Some(ActivityAction::ProfileUpdate),
            "password_change" => Some(ActivityAction::PasswordChange),
            "contact_form" => Some(ActivityAction::ContactForm),
            "project_view" => Some(ActivityAction::ProjectView),
            "blog_view" => Some(ActivityAction::BlogView),
            "search" => Some(ActivityAction::Search),
            "download" => Some(ActivityAction::Download),
            _ => None,
        }
    }
}

/// Anonymous activity is allowed; `user_id` is None for visitors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserActivity {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: ActivityAction,
    pub description: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<FixedOffset>,
}
