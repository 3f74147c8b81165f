use crate::modules::portfolio::application::domain::entities::Technology;
use crate::modules::portfolio::application::ports::outgoing::{
    CreateTechnologyData, TechnologyRepository, TechnologyRepositoryError, UpdateTechnologyData,
};
use crate::shared::text::slugify;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveTechnologyError {
    EmptyName,
    InvalidProficiency(i16),
    NameTaken,
    NotFound,
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateTechnologyInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub website_url: String,
    pub proficiency: i16,
    pub years_experience: i16,
}

#[async_trait]
pub trait ICreateTechnologyUseCase: Send + Sync {
    async fn execute(&self, input: CreateTechnologyInput)
        -> Result<Technology, SaveTechnologyError>;
}

#[async_trait]
pub trait IUpdateTechnologyUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateTechnologyData,
    ) -> Result<Technology, SaveTechnologyError>;
}

#[async_trait]
pub trait IDeleteTechnologyUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SaveTechnologyError>;
}

pub struct SaveTechnologyUseCase<R: TechnologyRepository> {
    repository: R,
}

impl<R: TechnologyRepository> SaveTechnologyUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: TechnologyRepositoryError) -> SaveTechnologyError {
    match e {
        TechnologyRepositoryError::NotFound => SaveTechnologyError::NotFound,
        TechnologyRepositoryError::NameTaken => SaveTechnologyError::NameTaken,
        TechnologyRepositoryError::DatabaseError(msg) => SaveTechnologyError::RepositoryError(msg),
    }
}

fn check_proficiency(value: i16) -> Result<(), SaveTechnologyError> {
    if !(0..=100).contains(&value) {
        return Err(SaveTechnologyError::InvalidProficiency(value));
    }
    Ok(())
}

#[async_trait]
impl<R: TechnologyRepository> ICreateTechnologyUseCase for SaveTechnologyUseCase<R> {
    async fn execute(
        &self,
        input: CreateTechnologyInput,
    ) -> Result<Technology, SaveTechnologyError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(SaveTechnologyError::EmptyName);
        }
        check_proficiency(input.proficiency)?;

        let slug = if input.slug.trim().is_empty() {
            slugify(&name)
        } else {
            slugify(&input.slug)
        };

        self.repository
            .create(CreateTechnologyData {
                name,
                slug,
                description: input.description,
                icon: input.icon,
                website_url: input.website_url,
                proficiency: input.proficiency,
                years_experience: input.years_experience,
            })
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: TechnologyRepository> IUpdateTechnologyUseCase for SaveTechnologyUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        mut data: UpdateTechnologyData,
    ) -> Result<Technology, SaveTechnologyError> {
        if matches!(data.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(SaveTechnologyError::EmptyName);
        }
        if let Some(value) = data.proficiency {
            check_proficiency(value)?;
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
impl<R: TechnologyRepository> IDeleteTechnologyUseCase for SaveTechnologyUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SaveTechnologyError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
