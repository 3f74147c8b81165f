use crate::modules::accounts::application::domain::entities::{UserActivity, UserSession};
use crate::modules::accounts::application::ports::outgoing::tracking_repository::{
    RecordActivityData, TrackingRepository, TrackingRepositoryError,
};
use async_trait::async_trait;
use uuid::Uuid;

pub const DEFAULT_ACTIVITY_LIMIT: u64 = 50;
pub const MAX_ACTIVITY_LIMIT: u64 = 200;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackActivityError {
    SessionNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IRecordActivityUseCase: Send + Sync {
    async fn execute(&self, data: RecordActivityData) -> Result<(), TrackActivityError>;
}

#[async_trait]
pub trait IRecentActivityUseCase: Send + Sync {
    async fn execute(&self, limit: Option<u64>) -> Result<Vec<UserActivity>, TrackActivityError>;
}

#[async_trait]
pub trait IListSessionsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<UserSession>, TrackActivityError>;
}

#[async_trait]
pub trait ITouchSessionUseCase: Send + Sync {
    async fn execute(&self, session_key: &str) -> Result<(), TrackActivityError>;
}

pub struct TrackActivityUseCase<T: TrackingRepository> {
    tracking: T,
}

impl<T: TrackingRepository> TrackActivityUseCase<T> {
    pub fn new(tracking: T) -> Self {
        Self { tracking }
    }
}

fn map_repo_error(e: TrackingRepositoryError) -> TrackActivityError {
    match e {
        TrackingRepositoryError::SessionNotFound => TrackActivityError::SessionNotFound,
        other => TrackActivityError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<T: TrackingRepository> IRecordActivityUseCase for TrackActivityUseCase<T> {
    async fn execute(&self, data: RecordActivityData) -> Result<(), TrackActivityError> {
        self.tracking
            .record_activity(data)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<T: TrackingRepository> IRecentActivityUseCase for TrackActivityUseCase<T> {
    async fn execute(&self, limit: Option<u64>) -> Result<Vec<UserActivity>, TrackActivityError> {
        let limit = limit
            .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
            .clamp(1, MAX_ACTIVITY_LIMIT);
        self.tracking
            .recent_activity(limit)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<T: TrackingRepository> IListSessionsUseCase for TrackActivityUseCase<T> {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<UserSession>, TrackActivityError> {
        self.tracking
            .list_sessions(user_id)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<T: TrackingRepository> ITouchSessionUseCase for TrackActivityUseCase<T> {
    async fn execute(&self, session_key: &str) -> Result<(), TrackActivityError> {
        self.tracking
            .touch_session(session_key)
            .await
            .map_err(map_repo_error)
    }
}
