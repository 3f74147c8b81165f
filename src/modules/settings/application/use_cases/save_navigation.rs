use crate::modules::settings::application::domain::entities::NavigationItem;
use crate::modules::settings::application::ports::outgoing::{
    CreateNavigationData, NavigationRepository, NavigationRepositoryError, UpdateNavigationData,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveNavigationError {
    EmptyTitle,
    EmptyUrl,
    NotFound,
    RepositoryError(String),
}

/// Creates a menu item.
#[async_trait]
pub trait ICreateNavigationUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateNavigationData,
    ) -> Result<NavigationItem, SaveNavigationError>;
}

/// Partially updates an existing menu item.
#[async_trait]
pub trait IUpdateNavigationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateNavigationData,
    ) -> Result<NavigationItem, SaveNavigationError>;
}

pub struct SaveNavigationUseCase<R: NavigationRepository> {
    repository: R,
}

impl<R: NavigationRepository> SaveNavigationUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: NavigationRepositoryError) -> SaveNavigationError {
    match e {
        NavigationRepositoryError::NotFound => SaveNavigationError::NotFound,
        NavigationRepositoryError::DatabaseError(msg) => SaveNavigationError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R: NavigationRepository> ICreateNavigationUseCase for SaveNavigationUseCase<R> {
    async fn execute(
        &self,
        data: CreateNavigationData,
    ) -> Result<NavigationItem, SaveNavigationError> {
        if data.title.trim().is_empty() {
            return Err(SaveNavigationError::EmptyTitle);
        }
        if data.url.trim().is_empty() {
            return Err(SaveNavigationError::EmptyUrl);
        }
        self.repository.create(data).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: NavigationRepository> IUpdateNavigationUseCase for SaveNavigationUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateNavigationData,
    ) -> Result<NavigationItem, SaveNavigationError> {
        if matches!(data.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(SaveNavigationError::EmptyTitle);
        }
        if matches!(data.url.as_deref(), Some(u) if u.trim().is_empty()) {
            return Err(SaveNavigationError::EmptyUrl);
        }
        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}
