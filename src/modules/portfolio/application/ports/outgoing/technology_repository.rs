use crate::modules::portfolio::application::domain::entities::Technology;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TechnologyRepositoryError {
    #[error("technology not found")]
    NotFound,
    #[error("technology name or slug already taken")]
    NameTaken,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateTechnologyData {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub website_url: String,
    pub proficiency: i16,
    pub years_experience: i16,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTechnologyData {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub website_url: Option<String>,
    pub proficiency: Option<i16>,
    pub years_experience: Option<i16>,
}

#[async_trait]
pub trait TechnologyRepository: Send + Sync {
    /// Ordered by proficiency desc, then name.
    async fn list(&self) -> Result<Vec<Technology>, TechnologyRepositoryError>;

    /// Proficiency >= `min_proficiency`, best first, capped at `limit`.
    async fn top_skills(
        &self,
        min_proficiency: i16,
        limit: u64,
    ) -> Result<Vec<Technology>, TechnologyRepositoryError>;

    async fn create(
        &self,
        data: CreateTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyRepositoryError>;
}
