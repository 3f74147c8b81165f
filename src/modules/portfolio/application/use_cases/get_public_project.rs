use crate::modules::portfolio::application::domain::entities::Project;
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use async_trait::async_trait;

pub const FEATURED_LIMIT: u64 = 6;

#[derive(Debug, Clone)]
pub enum GetProjectError {
    NotFound,
    RepositoryError(String),
}

/// Project detail by slug. Hidden statuses read as missing.
#[async_trait]
pub trait IGetPublicProjectUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectError>;
}

/// The six most recent featured projects.
#[async_trait]
pub trait IGetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectError>;
}

pub struct GetPublicProjectUseCase<R: ProjectRepository> {
    repository: R,
}

impl<R: ProjectRepository> GetPublicProjectUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: ProjectRepositoryError) -> GetProjectError {
    match e {
        ProjectRepositoryError::NotFound => GetProjectError::NotFound,
        other => GetProjectError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R: ProjectRepository> IGetPublicProjectUseCase for GetPublicProjectUseCase<R> {
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectError> {
        let project = self
            .repository
            .find_by_slug(slug)
            .await
            .map_err(map_repo_error)?
            .ok_or(GetProjectError::NotFound)?;

        if !project.status.is_public() {
            return Err(GetProjectError::NotFound);
        }
        Ok(project)
    }
}

#[async_trait]
impl<R: ProjectRepository> IGetFeaturedProjectsUseCase for GetPublicProjectUseCase<R> {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectError> {
        self.repository
            .featured(FEATURED_LIMIT)
            .await
            .map_err(map_repo_error)
    }
}
