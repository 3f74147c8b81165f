use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::outgoing::{
    CreateServiceData, ServiceRepository, ServiceRepositoryError, UpdateServiceData,
};
use crate::shared::text::slugify;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveServiceError {
    EmptyName,
    NegativePrice,
    SlugTaken,
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateServiceUseCase: Send + Sync {
    async fn execute(&self, data: CreateServiceData)
        -> Result<ServiceOffering, SaveServiceError>;
}

#[async_trait]
pub trait IUpdateServiceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateServiceData,
    ) -> Result<ServiceOffering, SaveServiceError>;
}

#[async_trait]
pub trait IDeleteServiceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SaveServiceError>;
}

pub struct SaveServiceUseCase<R: ServiceRepository> {
    repository: R,
}

impl<R: ServiceRepository> SaveServiceUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: ServiceRepositoryError) -> SaveServiceError {
    match e {
        ServiceRepositoryError::NotFound => SaveServiceError::NotFound,
        ServiceRepositoryError::SlugTaken => SaveServiceError::SlugTaken,
        ServiceRepositoryError::DatabaseError(msg) => SaveServiceError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R: ServiceRepository> ICreateServiceUseCase for SaveServiceUseCase<R> {
    async fn execute(
        &self,
        mut data: CreateServiceData,
    ) -> Result<ServiceOffering, SaveServiceError> {
        data.name = data.name.trim().to_string();
        if data.name.is_empty() {
            return Err(SaveServiceError::EmptyName);
        }
        if matches!(data.starting_price, Some(p) if p.is_sign_negative()) {
            return Err(SaveServiceError::NegativePrice);
        }
        data.slug = if data.slug.trim().is_empty() {
            slugify(&data.name)
        } else {
            slugify(&data.slug)
        };

        self.repository.create(data).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: ServiceRepository> IUpdateServiceUseCase for SaveServiceUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        mut data: UpdateServiceData,
    ) -> Result<ServiceOffering, SaveServiceError> {
        if matches!(data.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(SaveServiceError::EmptyName);
        }
        if matches!(data.starting_price, Some(Some(p)) if p.is_sign_negative()) {
            return Err(SaveServiceError::NegativePrice);
        }
        if let Some(slug) = data.slug.as_deref() {
            data.slug = Some(slugify(slug));
        }

        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: ServiceRepository> IDeleteServiceUseCase for SaveServiceUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SaveServiceError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
