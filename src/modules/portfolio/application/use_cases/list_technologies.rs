use crate::modules::portfolio::application::domain::entities::Technology;
use crate::modules::portfolio::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};
use async_trait::async_trait;

/// Threshold and cap for the `top_skills` listing.
pub const TOP_SKILL_MIN_PROFICIENCY: i16 = 70;
pub const TOP_SKILL_LIMIT: u64 = 10;

#[derive(Debug, Clone)]
pub enum ListTechnologiesError {
    RepositoryError(String),
}

#[async_trait]
pub trait IListTechnologiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Technology>, ListTechnologiesError>;
}

#[async_trait]
pub trait ITopSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Technology>, ListTechnologiesError>;
}

pub struct ListTechnologiesUseCase<R: TechnologyRepository> {
    repository: R,
}

impl<R: TechnologyRepository> ListTechnologiesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: TechnologyRepositoryError) -> ListTechnologiesError {
    ListTechnologiesError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R: TechnologyRepository> IListTechnologiesUseCase for ListTechnologiesUseCase<R> {
    async fn execute(&self) -> Result<Vec<Technology>, ListTechnologiesError> {
        self.repository.list().await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: TechnologyRepository> ITopSkillsUseCase for ListTechnologiesUseCase<R> {
    async fn execute(&self) -> Result<Vec<Technology>, ListTechnologiesError> {
        self.repository
            .top_skills(TOP_SKILL_MIN_PROFICIENCY, TOP_SKILL_LIMIT)
            .await
            .map_err(map_repo_error)
    }
}
