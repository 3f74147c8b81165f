use crate::modules::journey::application::domain::entities::FaqItem;
use crate::modules::journey::application::ports::outgoing::{
    CreateFaqData, FaqRepository, FaqRepositoryError, UpdateFaqData,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveFaqError {
    EmptyQuestion,
    EmptyAnswer,
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateFaqUseCase: Send + Sync {
    async fn execute(&self, data: CreateFaqData) -> Result<FaqItem, SaveFaqError>;
}

#[async_trait]
pub trait IUpdateFaqUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: UpdateFaqData) -> Result<FaqItem, SaveFaqError>;
}

#[async_trait]
pub trait IDeleteFaqUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SaveFaqError>;
}

pub struct SaveFaqUseCase<R: FaqRepository> {
    repository: R,
}

impl<R: FaqRepository> SaveFaqUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: FaqRepositoryError) -> SaveFaqError {
    match e {
        FaqRepositoryError::NotFound => SaveFaqError::NotFound,
        FaqRepositoryError::DatabaseError(msg) => SaveFaqError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R: FaqRepository> ICreateFaqUseCase for SaveFaqUseCase<R> {
    async fn execute(&self, data: CreateFaqData) -> Result<FaqItem, SaveFaqError> {
        if data.question.trim().is_empty() {
            return Err(SaveFaqError::EmptyQuestion);
        }
        if data.answer.trim().is_empty() {
            return Err(SaveFaqError::EmptyAnswer);
        }
        self.repository.create(data).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: FaqRepository> IUpdateFaqUseCase for SaveFaqUseCase<R> {
    async fn execute(&self, id: Uuid, data: UpdateFaqData) -> Result<FaqItem, SaveFaqError> {
        if matches!(data.question.as_deref(), Some(q) if q.trim().is_empty()) {
            return Err(SaveFaqError::EmptyQuestion);
        }
        if matches!(data.answer.as_deref(), Some(a) if a.trim().is_empty()) {
            return Err(SaveFaqError::EmptyAnswer);
        }
        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: FaqRepository> IDeleteFaqUseCase for SaveFaqUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SaveFaqError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
