use crate::modules::journey::application::domain::entities::FaqItem;
use crate::modules::journey::application::ports::outgoing::{FaqRepository, FaqRepositoryError};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListFaqsError {
    RepositoryError(String),
}

#[async_trait]
pub trait IListFaqsUseCase: Send + Sync {
    async fn execute(&self, only_active: bool) -> Result<Vec<FaqItem>, ListFaqsError>;
}

pub struct ListFaqsUseCase<R: FaqRepository> {
    repository: R,
}

impl<R: FaqRepository> ListFaqsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: FaqRepository> IListFaqsUseCase for ListFaqsUseCase<R> {
    async fn execute(&self, only_active: bool) -> Result<Vec<FaqItem>, ListFaqsError> {
        self.repository
            .list(only_active)
            .await
            .map_err(|e| match e {
                FaqRepositoryError::NotFound => {
                    ListFaqsError::RepositoryError("unexpected not-found on list".to_string())
                }
                FaqRepositoryError::DatabaseError(msg) => ListFaqsError::RepositoryError(msg),
            })
    }
}
