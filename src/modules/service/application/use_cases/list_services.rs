use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::outgoing::{
    ServiceRepository, ServiceRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListServicesError {
    RepositoryError(String),
}

/// `only_active` is true on the public surface.
#[async_trait]
pub trait IListServicesUseCase: Send + Sync {
    async fn execute(&self, only_active: bool) -> Result<Vec<ServiceOffering>, ListServicesError>;
}

/// Active featured services for the landing page.
#[async_trait]
pub trait IFeaturedServicesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ListServicesError>;
}

pub struct ListServicesUseCase<R: ServiceRepository> {
    repository: R,
}

impl<R: ServiceRepository> ListServicesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: ServiceRepositoryError) -> ListServicesError {
    ListServicesError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R: ServiceRepository> IListServicesUseCase for ListServicesUseCase<R> {
    async fn execute(&self, only_active: bool) -> Result<Vec<ServiceOffering>, ListServicesError> {
        self.repository
            .list(only_active)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: ServiceRepository> IFeaturedServicesUseCase for ListServicesUseCase<R> {
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ListServicesError> {
        self.repository.featured().await.map_err(map_repo_error)
    }
}
