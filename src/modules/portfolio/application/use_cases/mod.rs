pub mod get_public_project;
pub mod get_stats;
pub mod list_categories;
pub mod list_projects;
pub mod list_technologies;
pub mod save_category;
pub mod save_project;
pub mod save_technology;
