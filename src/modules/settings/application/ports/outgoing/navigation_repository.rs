use crate::modules::settings::application::domain::entities::NavigationItem;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NavigationRepositoryError {
    #[error("navigation item not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateNavigationData {
    pub title: String,
    pub url: String,
    pub icon: String,
    pub order: i32,
    pub is_active: bool,
    pub is_external: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateNavigationData {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_external: Option<bool>,
}

#[async_trait]
pub trait NavigationRepository: Send + Sync {
    /// Ordered by `(order, title)`; `only_active` filters for the public menu.
    async fn list(
        &self,
        only_active: bool,
    ) -> Result<Vec<NavigationItem>, NavigationRepositoryError>;

    async fn create(
        &self,
        data: CreateNavigationData,
    ) -> Result<NavigationItem, NavigationRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateNavigationData,
    ) -> Result<NavigationItem, NavigationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), NavigationRepositoryError>;

    /// Flips `is_active` and returns the new value.
    async fn toggle_active(&self, id: Uuid) -> Result<bool, NavigationRepositoryError>;
}
