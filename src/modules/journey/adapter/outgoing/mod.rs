pub mod sea_orm_entity;

mod faq_repository_postgres;
mod journey_repository_postgres;

pub use faq_repository_postgres::FaqRepositoryPostgres;
pub use journey_repository_postgres::JourneyRepositoryPostgres;
