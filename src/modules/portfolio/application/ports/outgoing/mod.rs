mod category_repository;
mod project_repository;
mod stats_repository;
mod technology_repository;

pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData, UpdateCategoryData,
};
pub use project_repository::{
    CreateProjectData, ProjectFilter, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
pub use stats_repository::{StatsCountsRepository, StatsRepositoryError};
pub use technology_repository::{
    CreateTechnologyData, TechnologyRepository, TechnologyRepositoryError, UpdateTechnologyData,
};
