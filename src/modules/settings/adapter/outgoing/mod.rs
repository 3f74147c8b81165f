pub mod sea_orm_entity;

mod navigation_repository_postgres;
mod palette_repository_postgres;
mod settings_repository_postgres;

pub use navigation_repository_postgres::NavigationRepositoryPostgres;
pub use palette_repository_postgres::PaletteRepositoryPostgres;
pub use settings_repository_postgres::SettingsRepositoryPostgres;
