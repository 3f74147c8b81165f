use crate::modules::journey::application::domain::entities::FaqItem;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FaqRepositoryError {
    #[error("faq item not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateFaqData {
    pub question: String,
    pub answer: String,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFaqData {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Ordered by `(order, question)`.
    async fn list(&self, only_active: bool) -> Result<Vec<FaqItem>, FaqRepositoryError>;

    async fn create(&self, data: CreateFaqData) -> Result<FaqItem, FaqRepositoryError>;

    async fn update(&self, id: Uuid, data: UpdateFaqData) -> Result<FaqItem, FaqRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), FaqRepositoryError>;
}
