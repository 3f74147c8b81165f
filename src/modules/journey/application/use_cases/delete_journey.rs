use crate::modules::journey::application::ports::outgoing::{
    JourneyRepository, JourneyRepositoryError,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum DeleteJourneyError {
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteJourneyUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteJourneyError>;
}

pub struct DeleteJourneyUseCase<R: JourneyRepository> {
    repository: R,
}

impl<R: JourneyRepository> DeleteJourneyUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: JourneyRepository> IDeleteJourneyUseCase for DeleteJourneyUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteJourneyError> {
        self.repository.delete(id).await.map_err(|e| match e {
            JourneyRepositoryError::NotFound => DeleteJourneyError::NotFound,
            JourneyRepositoryError::DatabaseError(msg) => DeleteJourneyError::RepositoryError(msg),
        })
    }
}
