use crate::modules::journey::application::domain::entities::{EntryType, JourneyEntry};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum JourneyRepositoryError {
    #[error("journey entry not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Filters for the timeline listing. `None` means "do not filter".
#[derive(Debug, Clone, Copy, Default)]
pub struct JourneyFilter {
    pub entry_type: Option<EntryType>,
    pub only_active: bool,
}

#[derive(Debug, Clone)]
pub struct CreateJourneyData {
    pub entry_type: EntryType,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub is_active: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateJourneyData {
    pub entry_type: Option<EntryType>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Ordered by `start_date` desc, then `order`.
    async fn list(
        &self,
        filter: JourneyFilter,
    ) -> Result<Vec<JourneyEntry>, JourneyRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JourneyEntry>, JourneyRepositoryError>;

    async fn create(&self, data: CreateJourneyData)
        -> Result<JourneyEntry, JourneyRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateJourneyData,
    ) -> Result<JourneyEntry, JourneyRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), JourneyRepositoryError>;
}
