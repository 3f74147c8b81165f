use crate::modules::accounts::application::domain::entities::UserProfile;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("profile not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub experience_years: Option<i16>,
    pub email_notifications: Option<bool>,
    pub activity_alerts: Option<bool>,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Creates an empty profile row on first read.
    async fn get_or_create(&self, user_id: Uuid) -> Result<UserProfile, ProfileRepositoryError>;

    async fn update(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserProfile, ProfileRepositoryError>;
}
