pub mod categories;
pub mod projects_admin;
pub mod projects_public;
pub mod stats;
pub mod technologies;

pub use categories::{
    create_category_handler, delete_category_handler, get_categories_handler,
    update_category_handler,
};
pub use projects_admin::{
    create_project_handler, delete_project_handler, get_admin_projects_handler,
    update_project_handler,
};
pub use projects_public::{
    get_featured_projects_handler, get_public_project_handler, get_public_projects_handler,
};
pub use stats::get_stats_handler;
pub use technologies::{
    create_technology_handler, delete_technology_handler, get_technologies_handler,
    get_top_skills_handler, update_technology_handler,
};
