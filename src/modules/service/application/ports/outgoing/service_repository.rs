use crate::modules::service::application::domain::entities::ServiceOffering;
use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceRepositoryError {
    #[error("service not found")]
    NotFound,
    #[error("service slug already taken")]
    SlugTaken,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateServiceData {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub icon: String,
    pub delivery_time: String,
    pub features: Vec<String>,
    pub process_steps: Vec<String>,
    pub starting_price: Option<Decimal>,
    pub price_unit: String,
    pub is_active: bool,
    pub is_featured: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceData {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub icon: Option<String>,
    pub delivery_time: Option<String>,
    pub features: Option<Vec<String>>,
    pub process_steps: Option<Vec<String>>,
    pub starting_price: Option<Option<Decimal>>,
    pub price_unit: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Ordered by `(order, name)`. `only_active` drives the public surface.
    async fn list(&self, only_active: bool)
        -> Result<Vec<ServiceOffering>, ServiceRepositoryError>;

    /// Active and featured, same ordering.
    async fn featured(&self) -> Result<Vec<ServiceOffering>, ServiceRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ServiceOffering>, ServiceRepositoryError>;

    async fn create(
        &self,
        data: CreateServiceData,
    ) -> Result<ServiceOffering, ServiceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateServiceData,
    ) -> Result<ServiceOffering, ServiceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ServiceRepositoryError>;
}
