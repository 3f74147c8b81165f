use utoipa::OpenApi;

use crate::modules::blog::adapter::incoming::web::routes::posts_public::BlogPostDto;
use crate::modules::blog::application::domain::entities::PostStatus;
use crate::modules::contact::adapter::incoming::web::routes::contact::ContactRequest;
use crate::modules::journey::adapter::incoming::web::routes::journey::JourneyEntryDto;
use crate::modules::journey::application::domain::entities::EntryType;
use crate::modules::portfolio::adapter::incoming::web::routes::projects_public::ProjectDto;
use crate::modules::portfolio::application::domain::entities::{
    CategoryRef, ProjectStatus, ProjectType, TechnologyRef,
};
use crate::modules::settings::adapter::incoming::web::routes::site_settings::SiteSettingsDto;
use crate::modules::settings::application::domain::entities::SkillExpertise;
use crate::shared::api::ApiError;

/// Public read surface of the API. Admin endpoints stay undocumented
/// on purpose, they are reachable only behind the reverse proxy.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for Portfolio Content Management System",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Settings
        crate::modules::settings::adapter::incoming::web::routes::site_settings::get_site_settings_handler,
        crate::modules::settings::adapter::incoming::web::routes::navigation::get_navigation_handler,
        crate::modules::settings::adapter::incoming::web::routes::palettes::get_palettes_handler,

        // Journey
        crate::modules::journey::adapter::incoming::web::routes::journey::get_journey_handler,
        crate::modules::journey::adapter::incoming::web::routes::faqs::get_faqs_handler,

        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::categories::get_categories_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::technologies::get_technologies_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::technologies::get_top_skills_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::projects_public::get_public_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::projects_public::get_featured_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::projects_public::get_public_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::stats::get_stats_handler,

        // Blog
        crate::modules::blog::adapter::incoming::web::routes::posts_public::get_public_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::posts_public::get_recent_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::posts_public::get_public_post_handler,

        // Testimonials
        crate::modules::testimonial::adapter::incoming::web::routes::testimonials::get_testimonials_handler,

        // Services
        crate::modules::service::adapter::incoming::web::routes::services::get_services_handler,
        crate::modules::service::adapter::incoming::web::routes::services::get_featured_services_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::contact::submit_contact_handler,

        // CV
        crate::modules::resume::adapter::incoming::web::routes::cv_download::download_cv_handler,
    ),
    components(
        schemas(
            ApiError,
            SiteSettingsDto,
            SkillExpertise,
            JourneyEntryDto,
            EntryType,
            ProjectDto,
            ProjectType,
            ProjectStatus,
            CategoryRef,
            TechnologyRef,
            BlogPostDto,
            PostStatus,
            ContactRequest,
        )
    ),
    tags(
        (name = "settings", description = "Site settings, navigation and color palettes"),
        (name = "journey", description = "Career timeline and FAQ endpoints"),
        (name = "portfolio", description = "Projects, categories, technologies and stats"),
        (name = "blog", description = "Published blog posts"),
        (name = "testimonial", description = "Approved client testimonials"),
        (name = "service", description = "Service offerings"),
        (name = "contact", description = "Contact form submission"),
        (name = "cv", description = "CV generation and download"),
    )
)]
pub struct ApiDoc;
