use crate::modules::accounts::application::domain::entities::ActivityAction;
use crate::modules::accounts::application::ports::outgoing::tracking_repository::{
    RecordActivityData, TrackingRepository, TrackingRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub enum LogoutError {
    SessionNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ILogoutUserUseCase: Send + Sync {
    async fn execute(&self, session_key: &str) -> Result<(), LogoutError>;
}

pub struct LogoutUserUseCase<T: TrackingRepository> {
    tracking: T,
}

impl<T: TrackingRepository> LogoutUserUseCase<T> {
    pub fn new(tracking: T) -> Self {
        Self { tracking }
    }
}

#[async_trait]
impl<T: TrackingRepository> ILogoutUserUseCase for LogoutUserUseCase<T> {
    async fn execute(&self, session_key: &str) -> Result<(), LogoutError> {
        let session = self
            .tracking
            .find_session(session_key)
            .await
            .map_err(|e| LogoutError::RepositoryError(e.to_string()))?
            .ok_or(LogoutError::SessionNotFound)?;

        self.tracking
            .close_session(session_key)
            .await
            .map_err(|e| match e {
                TrackingRepositoryError::SessionNotFound => LogoutError::SessionNotFound,
                other => LogoutError::RepositoryError(other.to_string()),
            })?;

        let result = self
            .tracking
            .record_activity(RecordActivityData {
                user_id: Some(session.user_id),
                action: ActivityAction::Logout,
                description: Some("User logged out".to_string()),
                metadata: serde_json::json!({}),
                ip_address: None,
                user_agent: None,
                referer: None,
            })
            .await;
        if let Err(e) = result {
            tracing::warn!("failed to record logout activity: {}", e);
        }

        Ok(())
    }
}
