use crate::modules::portfolio::application::domain::entities::{PortfolioStats, TechnologyRef};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, StatsCountsRepository, TechnologyRepository,
};
use async_trait::async_trait;

/// Only strong skills appear in the stats payload.
pub const STATS_TECH_MIN_PROFICIENCY: i16 = 80;
pub const STATS_TECH_LIMIT: u64 = 8;

#[derive(Debug, Clone)]
pub enum GetStatsError {
    RepositoryError(String),
}

#[async_trait]
pub trait IGetStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioStats, GetStatsError>;
}

pub struct GetStatsUseCase<P, T, C>
where
    P: ProjectRepository,
    T: TechnologyRepository,
    C: StatsCountsRepository,
{
    projects: P,
    technologies: T,
    counts: C,
}

impl<P, T, C> GetStatsUseCase<P, T, C>
where
    P: ProjectRepository,
    T: TechnologyRepository,
    C: StatsCountsRepository,
{
    pub fn new(projects: P, technologies: T, counts: C) -> Self {
        Self {
            projects,
            technologies,
            counts,
        }
    }
}

#[async_trait]
impl<P, T, C> IGetStatsUseCase for GetStatsUseCase<P, T, C>
where
    P: ProjectRepository,
    T: TechnologyRepository,
    C: StatsCountsRepository,
{
    async fn execute(&self) -> Result<PortfolioStats, GetStatsError> {
        let total_projects = self
            .projects
            .count_public()
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;
        let featured_projects = self
            .projects
            .count_featured()
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;
        let projects_by_type = self
            .projects
            .count_by_type()
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;
        let top_technologies = self
            .technologies
            .top_skills(STATS_TECH_MIN_PROFICIENCY, STATS_TECH_LIMIT)
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|t| TechnologyRef {
                id: t.id,
                name: t.name,
                slug: t.slug,
                icon: t.icon,
            })
            .collect();
        let total_posts = self
            .counts
            .published_post_count()
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;
        let total_services = self
            .counts
            .active_service_count()
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;
        let total_technologies = self
            .counts
            .technology_count()
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;

        Ok(PortfolioStats {
            total_projects,
            featured_projects,
            total_posts,
            total_technologies,
            total_services,
            projects_by_type,
            top_technologies,
        })
    }
}
