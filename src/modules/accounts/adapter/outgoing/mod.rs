pub mod credentials_repository_postgres;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;
pub mod tracking_repository_postgres;
