use crate::modules::portfolio::application::domain::entities::{Project, ProjectStatus};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectFilter, ProjectRepository, ProjectRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListProjectsError {
    RepositoryError(String),
}

/// Admin listing, every status included.
#[async_trait]
pub trait IListProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectFilter) -> Result<Vec<Project>, ListProjectsError>;
}

/// Visitor listing, restricted to published and featured projects.
#[async_trait]
pub trait IListPublicProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectFilter) -> Result<Vec<Project>, ListProjectsError>;
}

pub struct ListProjectsUseCase<R: ProjectRepository> {
    repository: R,
}

impl<R: ProjectRepository> ListProjectsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: ProjectRepositoryError) -> ListProjectsError {
    ListProjectsError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R: ProjectRepository> IListProjectsUseCase for ListProjectsUseCase<R> {
    async fn execute(&self, mut filter: ProjectFilter) -> Result<Vec<Project>, ListProjectsError> {
        filter.statuses = None;
        self.repository.list(filter).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: ProjectRepository> IListPublicProjectsUseCase for ListProjectsUseCase<R> {
    async fn execute(&self, mut filter: ProjectFilter) -> Result<Vec<Project>, ListProjectsError> {
        filter.statuses = Some(vec![ProjectStatus::Published, ProjectStatus::Featured]);
        self.repository.list(filter).await.map_err(map_repo_error)
    }
}
