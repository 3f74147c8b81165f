use crate::modules::portfolio::application::domain::entities::{
    Project, ProjectStatus, ProjectType, TypeCount,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("project not found")]
    NotFound,
    #[error("project slug already taken")]
    SlugTaken,
    #[error("referenced record not found: {0}")]
    MissingReference(String),
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Filters applied to the public project listing. Unset fields do not
/// filter.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub category_slug: Option<String>,
    pub technology_slug: Option<String>,
    pub project_type: Option<ProjectType>,
    /// `None` on the admin surface; public listings pass the visible
    /// statuses.
    pub statuses: Option<Vec<ProjectStatus>>,
}

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub category_id: Option<Uuid>,
    pub technology_ids: Vec<Uuid>,
    pub featured_image: String,
    pub gallery: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub documentation_url: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: String,
    pub team_size: i16,
    pub key_features: Vec<String>,
    pub challenges: String,
    pub solutions: String,
    pub results: String,
    pub meta_title: String,
    pub meta_description: String,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub project_type: Option<ProjectType>,
    pub status: Option<ProjectStatus>,
    pub category_id: Option<Option<Uuid>>,
    pub technology_ids: Option<Vec<Uuid>>,
    pub featured_image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub documentation_url: Option<String>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub client: Option<String>,
    pub team_size: Option<i16>,
    pub key_features: Option<Vec<String>>,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
    pub results: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_featured: Option<bool>,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Newest first by creation time.
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Featured projects, newest first, capped at `limit`.
    async fn featured(&self, limit: u64) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, ProjectRepositoryError>;

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;

    /// Aggregates for the stats endpoint, public statuses only.
    async fn count_public(&self) -> Result<i64, ProjectRepositoryError>;

    async fn count_featured(&self) -> Result<i64, ProjectRepositoryError>;

    async fn count_by_type(&self) -> Result<Vec<TypeCount>, ProjectRepositoryError>;
}
