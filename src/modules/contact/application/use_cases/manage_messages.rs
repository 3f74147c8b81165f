use crate::modules::contact::application::domain::entities::{ContactMessage, MessageStatus};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum ManageMessagesError {
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IListMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, ManageMessagesError>;
}

#[async_trait]
pub trait IGetMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ContactMessage, ManageMessagesError>;
}

#[async_trait]
pub trait IUpdateMessageStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<ContactMessage, ManageMessagesError>;
}

#[async_trait]
pub trait IDeleteMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ManageMessagesError>;
}

pub struct ManageMessagesUseCase<R: ContactRepository> {
    repository: R,
}

impl<R: ContactRepository> ManageMessagesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: ContactRepositoryError) -> ManageMessagesError {
    match e {
        ContactRepositoryError::NotFound => ManageMessagesError::NotFound,
        other => ManageMessagesError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R: ContactRepository> IListMessagesUseCase for ManageMessagesUseCase<R> {
    async fn execute(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, ManageMessagesError> {
        self.repository.list(status).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: ContactRepository> IGetMessageUseCase for ManageMessagesUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<ContactMessage, ManageMessagesError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(ManageMessagesError::NotFound)
    }
}

#[async_trait]
impl<R: ContactRepository> IUpdateMessageStatusUseCase for ManageMessagesUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<ContactMessage, ManageMessagesError> {
        self.repository
            .update_status(id, status)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: ContactRepository> IDeleteMessageUseCase for ManageMessagesUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), ManageMessagesError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
