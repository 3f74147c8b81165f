pub mod categories;
pub mod project_technologies;
pub mod projects;
pub mod technologies;
