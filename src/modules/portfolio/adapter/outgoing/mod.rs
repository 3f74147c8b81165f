pub mod sea_orm_entity;

mod category_repository_postgres;
mod project_repository_postgres;
mod stats_counts_postgres;
mod technology_repository_postgres;

pub use category_repository_postgres::CategoryRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
pub use stats_counts_postgres::StatsCountsPostgres;
pub use technology_repository_postgres::TechnologyRepositoryPostgres;
