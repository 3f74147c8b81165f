use crate::modules::portfolio::application::domain::entities::Category;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("category not found")]
    NotFound,
    #[error("category name or slug already taken")]
    NameTaken,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryData {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Ordered by name.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    async fn create(&self, data: CreateCategoryData) -> Result<Category, CategoryRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CategoryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError>;
}
