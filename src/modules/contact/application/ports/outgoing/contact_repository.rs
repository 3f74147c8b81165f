use crate::modules::contact::application::domain::entities::{ContactMessage, MessageStatus};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("contact message not found")]
    NotFound,
    #[error("referenced record not found: {0}")]
    MissingReference(String),
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateMessageData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub service_interest_id: Option<Uuid>,
    pub ip_address: String,
    pub user_agent: String,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Newest first, optionally narrowed to one status.
    async fn list(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessage>, ContactRepositoryError>;

    async fn create(
        &self,
        data: CreateMessageData,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
