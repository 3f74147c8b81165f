use crate::modules::portfolio::application::domain::entities::Project;
use crate::modules::portfolio::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::shared::text::slugify;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveProjectError {
    EmptyTitle,
    EndBeforeStart,
    InvalidTeamSize(i16),
    SlugTaken,
    MissingReference(String),
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<Project, SaveProjectError>;
}

#[async_trait]
pub trait IUpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<Project, SaveProjectError>;
}

#[async_trait]
pub trait IDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SaveProjectError>;
}

pub struct SaveProjectUseCase<R: ProjectRepository> {
    repository: R,
}

impl<R: ProjectRepository> SaveProjectUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: ProjectRepositoryError) -> SaveProjectError {
    match e {
        ProjectRepositoryError::NotFound => SaveProjectError::NotFound,
        ProjectRepositoryError::SlugTaken => SaveProjectError::SlugTaken,
        ProjectRepositoryError::MissingReference(what) => SaveProjectError::MissingReference(what),
        ProjectRepositoryError::DatabaseError(msg) => SaveProjectError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R: ProjectRepository> ICreateProjectUseCase for SaveProjectUseCase<R> {
    async fn execute(&self, mut data: CreateProjectData) -> Result<Project, SaveProjectError> {
        data.title = data.title.trim().to_string();
        if data.title.is_empty() {
            return Err(SaveProjectError::EmptyTitle);
        }
        if data.team_size < 1 {
            return Err(SaveProjectError::InvalidTeamSize(data.team_size));
        }
        if let (Some(start), Some(end)) = (data.start_date, data.end_date) {
            if end < start {
                return Err(SaveProjectError::EndBeforeStart);
            }
        }

        data.slug = if data.slug.trim().is_empty() {
            slugify(&data.title)
        } else {
            slugify(&data.slug)
        };

        self.repository.create(data).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: ProjectRepository> IUpdateProjectUseCase for SaveProjectUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        mut data: UpdateProjectData,
    ) -> Result<Project, SaveProjectError> {
        if matches!(data.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(SaveProjectError::EmptyTitle);
        }
        if matches!(data.team_size, Some(n) if n < 1) {
            return Err(SaveProjectError::InvalidTeamSize(data.team_size.unwrap_or(0)));
        }
        if let (Some(Some(start)), Some(Some(end))) = (data.start_date, data.end_date) {
            if end < start {
                return Err(SaveProjectError::EndBeforeStart);
            }
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
impl<R: ProjectRepository> IDeleteProjectUseCase for SaveProjectUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SaveProjectError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
