pub use sea_orm_migration::prelude::*;

mod m20250610_093015_create_site_settings_table;
mod m20250610_094102_create_navigation_items_table;
mod m20250610_095233_create_color_palettes_table;
mod m20250611_081910_create_journey_entries_table;
mod m20250611_082447_create_faq_items_table;
mod m20250612_101500_create_categories_table;
mod m20250612_101841_create_technologies_table;
mod m20250612_103228_create_projects_table;
mod m20250612_104006_create_project_technologies_table;
mod m20250613_090330_create_blog_posts_table;
mod m20250613_142217_create_testimonials_table;
mod m20250614_110422_create_service_offerings_table;
mod m20250614_112050_create_contact_messages_table;
mod m20250615_083812_create_users_table;
mod m20250615_084529_create_user_profiles_table;
mod m20250615_085311_create_login_attempts_table;
mod m20250615_085902_create_user_sessions_table;
mod m20250615_090644_create_user_activities_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_093015_create_site_settings_table::Migration),
            Box::new(m20250610_094102_create_navigation_items_table::Migration),
            Box::new(m20250610_095233_create_color_palettes_table::Migration),
            Box::new(m20250611_081910_create_journey_entries_table::Migration),
            Box::new(m20250611_082447_create_faq_items_table::Migration),
            Box::new(m20250612_101500_create_categories_table::Migration),
            Box::new(m20250612_101841_create_technologies_table::Migration),
            Box::new(m20250612_103228_create_projects_table::Migration),
            Box::new(m20250612_104006_create_project_technologies_table::Migration),
            Box::new(m20250613_090330_create_blog_posts_table::Migration),
            Box::new(m20250613_142217_create_testimonials_table::Migration),
            Box::new(m20250614_110422_create_service_offerings_table::Migration),
            Box::new(m20250614_112050_create_contact_messages_table::Migration),
            Box::new(m20250615_083812_create_users_table::Migration),
            Box::new(m20250615_084529_create_user_profiles_table::Migration),
            Box::new(m20250615_085311_create_login_attempts_table::Migration),
            Box::new(m20250615_085902_create_user_sessions_table::Migration),
            Box::new(m20250615_090644_create_user_activities_table::Migration),
        ]
    }
}
