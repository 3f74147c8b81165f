use crate::modules::accounts::application::domain::entities::{
    ActivityAction, UserActivity, UserSession,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TrackingRepositoryError {
    #[error("session not found")]
    SessionNotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct LoginAttemptData {
    pub username: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone)]
pub struct CreateSessionData {
    pub user_id: Uuid,
    pub session_key: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordActivityData {
    pub user_id: Option<Uuid>,
    pub action: ActivityAction,
    pub description: Option<String>,
    pub metadata: serde_json::Value,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

#[async_trait]
pub trait TrackingRepository: Send + Sync {
    async fn record_login_attempt(
        &self,
        data: LoginAttemptData,
    ) -> Result<(), TrackingRepositoryError>;

    async fn create_session(
        &self,
        data: CreateSessionData,
    ) -> Result<UserSession, TrackingRepositoryError>;

    async fn find_session(
        &self,
        session_key: &str,
    ) -> Result<Option<UserSession>, TrackingRepositoryError>;

    /// Refreshes last_activity on an active session.
    async fn touch_session(&self, session_key: &str) -> Result<(), TrackingRepositoryError>;

    async fn close_session(&self, session_key: &str) -> Result<(), TrackingRepositoryError>;

    async fn list_sessions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserSession>, TrackingRepositoryError>;

    async fn record_activity(
        &self,
        data: RecordActivityData,
    ) -> Result<(), TrackingRepositoryError>;

    async fn recent_activity(
        &self,
        limit: u64,
    ) -> Result<Vec<UserActivity>, TrackingRepositoryError>;
}
