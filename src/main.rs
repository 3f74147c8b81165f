pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::accounts::adapter::outgoing::credentials_repository_postgres::CredentialsRepositoryPostgres;
use crate::modules::accounts::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::modules::accounts::adapter::outgoing::tracking_repository_postgres::TrackingRepositoryPostgres;
use crate::modules::accounts::application::services::argon2_hasher::Argon2Hasher;
use crate::modules::accounts::application::use_cases::login_user::LoginUserUseCase;
use crate::modules::accounts::application::use_cases::logout_user::LogoutUserUseCase;
use crate::modules::accounts::application::use_cases::manage_profile::ManageProfileUseCase;
use crate::modules::accounts::application::use_cases::track_activity::TrackActivityUseCase;
use crate::modules::accounts::application::AccountsUseCases;
use crate::modules::blog::adapter::outgoing::blog_repository_postgres::BlogRepositoryPostgres;
use crate::modules::blog::application::use_cases::get_public_post::GetPublicPostUseCase;
use crate::modules::blog::application::use_cases::list_posts::ListPostsUseCase;
use crate::modules::blog::application::use_cases::save_post::SavePostUseCase;
use crate::modules::blog::application::BlogUseCases;
use crate::modules::contact::adapter::outgoing::contact_repository_postgres::ContactRepositoryPostgres;
use crate::modules::contact::application::use_cases::manage_messages::ManageMessagesUseCase;
use crate::modules::contact::application::use_cases::submit_message::SubmitMessageUseCase;
use crate::modules::contact::application::ContactUseCases;
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::email::application::services::notification_service::NotificationService;
use crate::modules::journey::adapter::outgoing::FaqRepositoryPostgres;
use crate::modules::journey::adapter::outgoing::JourneyRepositoryPostgres;
use crate::modules::journey::application::use_cases::delete_journey::DeleteJourneyUseCase;
use crate::modules::journey::application::use_cases::list_faqs::ListFaqsUseCase;
use crate::modules::journey::application::use_cases::list_journey::ListJourneyUseCase;
use crate::modules::journey::application::use_cases::save_faq::SaveFaqUseCase;
use crate::modules::journey::application::use_cases::save_journey::SaveJourneyUseCase;
use crate::modules::journey::application::JourneyUseCases;
use crate::modules::portfolio::adapter::outgoing::CategoryRepositoryPostgres;
use crate::modules::portfolio::adapter::outgoing::ProjectRepositoryPostgres;
use crate::modules::portfolio::adapter::outgoing::StatsCountsPostgres;
use crate::modules::portfolio::adapter::outgoing::TechnologyRepositoryPostgres;
use crate::modules::portfolio::application::use_cases::get_public_project::GetPublicProjectUseCase;
use crate::modules::portfolio::application::use_cases::get_stats::GetStatsUseCase;
use crate::modules::portfolio::application::use_cases::list_categories::ListCategoriesUseCase;
use crate::modules::portfolio::application::use_cases::list_projects::ListProjectsUseCase;
use crate::modules::portfolio::application::use_cases::list_technologies::ListTechnologiesUseCase;
use crate::modules::portfolio::application::use_cases::save_category::SaveCategoryUseCase;
use crate::modules::portfolio::application::use_cases::save_project::SaveProjectUseCase;
use crate::modules::portfolio::application::use_cases::save_technology::SaveTechnologyUseCase;
use crate::modules::portfolio::application::PortfolioUseCases;
use crate::modules::resume::adapter::outgoing::shell_pdf_engine::ShellPdfEngine;
use crate::modules::resume::application::use_cases::generate_cv::GenerateCvUseCase;
use crate::modules::resume::application::ResumeUseCases;
use crate::modules::service::adapter::outgoing::service_repository_postgres::ServiceRepositoryPostgres;
use crate::modules::service::application::use_cases::list_services::ListServicesUseCase;
use crate::modules::service::application::use_cases::save_service::SaveServiceUseCase;
use crate::modules::service::application::ServiceUseCases;
use crate::modules::settings::adapter::outgoing::NavigationRepositoryPostgres;
use crate::modules::settings::adapter::outgoing::PaletteRepositoryPostgres;
use crate::modules::settings::adapter::outgoing::SettingsRepositoryPostgres;
use crate::modules::settings::application::use_cases::delete_navigation::NavigationAdminUseCase;
use crate::modules::settings::application::use_cases::get_settings::{
    GetSettingsUseCase, IGetSettingsUseCase,
};
use crate::modules::settings::application::use_cases::list_navigation::ListNavigationUseCase;
use crate::modules::settings::application::use_cases::list_palettes::ListPalettesUseCase;
use crate::modules::settings::application::use_cases::save_navigation::SaveNavigationUseCase;
use crate::modules::settings::application::use_cases::save_palette::SavePaletteUseCase;
use crate::modules::settings::application::use_cases::set_default_palette::PaletteAdminUseCase;
use crate::modules::settings::application::use_cases::update_settings::UpdateSettingsUseCase;
use crate::modules::settings::application::SettingsUseCases;
use crate::modules::testimonial::adapter::outgoing::testimonial_repository_postgres::TestimonialRepositoryPostgres;
use crate::modules::testimonial::application::use_cases::list_testimonials::ListTestimonialsUseCase;
use crate::modules::testimonial::application::use_cases::save_testimonial::SaveTestimonialUseCase;
use crate::modules::testimonial::application::TestimonialUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub settings: SettingsUseCases,
    pub journey: JourneyUseCases,
    pub portfolio: PortfolioUseCases,
    pub blog: BlogUseCases,
    pub testimonial: TestimonialUseCases,
    pub service: ServiceUseCases,
    pub contact: ContactUseCases,
    pub accounts: AccountsUseCases,
    pub resume: ResumeUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // SMTP SETUPS
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let admin_email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| from_email.clone());
    let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "Portfolio".to_string());
    let smtp_sender = if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Invalid SMTP configuration")
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Settings
    let settings_repo = SettingsRepositoryPostgres::new(Arc::clone(&db_arc));
    let navigation_repo = NavigationRepositoryPostgres::new(Arc::clone(&db_arc));
    let palette_repo = PaletteRepositoryPostgres::new(Arc::clone(&db_arc));
    let get_settings: Arc<dyn IGetSettingsUseCase> =
        Arc::new(GetSettingsUseCase::new(settings_repo.clone()));
    let save_navigation = Arc::new(SaveNavigationUseCase::new(navigation_repo.clone()));
    let save_palette = Arc::new(SavePaletteUseCase::new(palette_repo.clone()));
    let palette_admin = Arc::new(PaletteAdminUseCase::new(palette_repo.clone()));
    let navigation_admin = Arc::new(NavigationAdminUseCase::new(navigation_repo.clone()));
    let settings_use_cases = SettingsUseCases {
        get_settings: Arc::clone(&get_settings),
        update_settings: Arc::new(UpdateSettingsUseCase::new(settings_repo.clone())),
        list_navigation: Arc::new(ListNavigationUseCase::new(navigation_repo.clone())),
        create_navigation: save_navigation.clone(),
        update_navigation: save_navigation,
        delete_navigation: navigation_admin.clone(),
        toggle_navigation: navigation_admin,
        list_palettes: Arc::new(ListPalettesUseCase::new(palette_repo.clone())),
        create_palette: save_palette.clone(),
        update_palette: save_palette,
        delete_palette: palette_admin.clone(),
        set_default_palette: palette_admin,
    };

    // Journey
    let journey_repo = JourneyRepositoryPostgres::new(Arc::clone(&db_arc));
    let faq_repo = FaqRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_journey = Arc::new(ListJourneyUseCase::new(journey_repo.clone()));
    let save_journey = Arc::new(SaveJourneyUseCase::new(journey_repo.clone()));
    let save_faq = Arc::new(SaveFaqUseCase::new(faq_repo.clone()));
    let journey_use_cases = JourneyUseCases {
        list_journey: list_journey.clone(),
        create_journey: save_journey.clone(),
        update_journey: save_journey,
        delete_journey: Arc::new(DeleteJourneyUseCase::new(journey_repo.clone())),
        list_faqs: Arc::new(ListFaqsUseCase::new(faq_repo.clone())),
        create_faq: save_faq.clone(),
        update_faq: save_faq.clone(),
        delete_faq: save_faq,
    };

    // Portfolio
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let technology_repo = TechnologyRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let stats_counts = StatsCountsPostgres::new(Arc::clone(&db_arc));
    let save_category = Arc::new(SaveCategoryUseCase::new(category_repo.clone()));
    let save_technology = Arc::new(SaveTechnologyUseCase::new(technology_repo.clone()));
    let save_project = Arc::new(SaveProjectUseCase::new(project_repo.clone()));
    let list_projects = Arc::new(ListProjectsUseCase::new(project_repo.clone()));
    let public_project = Arc::new(GetPublicProjectUseCase::new(project_repo.clone()));
    let list_technologies = Arc::new(ListTechnologiesUseCase::new(technology_repo.clone()));
    let portfolio_use_cases = PortfolioUseCases {
        list_categories: Arc::new(ListCategoriesUseCase::new(category_repo.clone())),
        create_category: save_category.clone(),
        update_category: save_category.clone(),
        delete_category: save_category,
        list_technologies: list_technologies.clone(),
        top_skills: list_technologies,
        create_technology: save_technology.clone(),
        update_technology: save_technology.clone(),
        delete_technology: save_technology,
        list_projects: list_projects.clone(),
        list_public_projects: list_projects,
        get_public_project: public_project.clone(),
        get_featured_projects: public_project,
        create_project: save_project.clone(),
        update_project: save_project.clone(),
        delete_project: save_project,
        get_stats: Arc::new(GetStatsUseCase::new(
            project_repo.clone(),
            technology_repo.clone(),
            stats_counts,
        )),
    };

    // Blog
    let blog_repo = BlogRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_posts = Arc::new(ListPostsUseCase::new(blog_repo.clone()));
    let save_post = Arc::new(SavePostUseCase::new(blog_repo.clone()));
    let blog_use_cases = BlogUseCases {
        list_posts: list_posts.clone(),
        list_public_posts: list_posts.clone(),
        recent_posts: list_posts,
        get_public_post: Arc::new(GetPublicPostUseCase::new(blog_repo.clone())),
        create_post: save_post.clone(),
        update_post: save_post.clone(),
        delete_post: save_post,
    };

    // Testimonials
    let testimonial_repo = TestimonialRepositoryPostgres::new(Arc::clone(&db_arc));
    let save_testimonial = Arc::new(SaveTestimonialUseCase::new(testimonial_repo.clone()));
    let testimonial_use_cases = TestimonialUseCases {
        list_testimonials: Arc::new(ListTestimonialsUseCase::new(testimonial_repo.clone())),
        create_testimonial: save_testimonial.clone(),
        update_testimonial: save_testimonial.clone(),
        delete_testimonial: save_testimonial,
    };

    // Services
    let service_repo = ServiceRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_services = Arc::new(ListServicesUseCase::new(service_repo.clone()));
    let save_service = Arc::new(SaveServiceUseCase::new(service_repo.clone()));
    let service_use_cases = ServiceUseCases {
        list_services: list_services.clone(),
        featured_services: list_services,
        create_service: save_service.clone(),
        update_service: save_service.clone(),
        delete_service: save_service,
    };

    // Email notifications (fire and forget)
    let email_sender: Arc<dyn EmailSender> = Arc::new(smtp_sender);
    let notifier = Arc::new(NotificationService::new(
        email_sender,
        &admin_email,
        &site_name,
    ));

    // Contact
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));
    let manage_messages = Arc::new(ManageMessagesUseCase::new(contact_repo.clone()));
    let contact_use_cases = ContactUseCases {
        submit_message: Arc::new(SubmitMessageUseCase::new(
            contact_repo.clone(),
            Arc::clone(&get_settings),
            notifier.clone(),
        )),
        list_messages: manage_messages.clone(),
        get_message: manage_messages.clone(),
        update_message_status: manage_messages.clone(),
        delete_message: manage_messages,
    };

    // Accounts
    let credentials_repo = CredentialsRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let tracking_repo = TrackingRepositoryPostgres::new(Arc::clone(&db_arc));
    let manage_profile = Arc::new(ManageProfileUseCase::new(
        profile_repo.clone(),
        tracking_repo.clone(),
    ));
    let track_activity = Arc::new(TrackActivityUseCase::new(tracking_repo.clone()));
    let accounts_use_cases = AccountsUseCases {
        login: Arc::new(LoginUserUseCase::new(
            credentials_repo.clone(),
            tracking_repo.clone(),
            Arc::new(Argon2Hasher),
        )),
        logout: Arc::new(LogoutUserUseCase::new(tracking_repo.clone())),
        get_profile: manage_profile.clone(),
        update_profile: manage_profile,
        record_activity: track_activity.clone(),
        recent_activity: track_activity.clone(),
        list_sessions: track_activity.clone(),
        touch_session: track_activity,
    };

    // Resume
    let resume_use_cases = ResumeUseCases {
        generate_cv: Arc::new(GenerateCvUseCase::new(
            Arc::clone(&get_settings),
            Arc::new(ListJourneyUseCase::new(journey_repo.clone())),
            Arc::new(ShellPdfEngine),
            notifier.clone(),
        )),
    };

    let state = AppState {
        settings: settings_use_cases,
        journey: journey_use_cases,
        portfolio: portfolio_use_cases,
        blog: blog_use_cases,
        testimonial: testimonial_use_cases,
        service: service_use_cases,
        contact: contact_use_cases,
        accounts: accounts_use_cases,
        resume: resume_use_cases,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::accounts::adapter::incoming::web::routes as accounts_routes;
    use crate::modules::blog::adapter::incoming::web::routes as blog_routes;
    use crate::modules::contact::adapter::incoming::web::routes as contact_routes;
    use crate::modules::journey::adapter::incoming::web::routes as journey_routes;
    use crate::modules::portfolio::adapter::incoming::web::routes as portfolio_routes;
    use crate::modules::resume::adapter::incoming::web::routes as resume_routes;
    use crate::modules::service::adapter::incoming::web::routes as service_routes;
    use crate::modules::settings::adapter::incoming::web::routes as settings_routes;
    use crate::modules::testimonial::adapter::incoming::web::routes as testimonial_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Settings
    cfg.service(settings_routes::get_site_settings_handler);
    cfg.service(settings_routes::update_site_settings_handler);
    cfg.service(settings_routes::get_navigation_handler);
    cfg.service(settings_routes::get_admin_navigation_handler);
    cfg.service(settings_routes::create_navigation_handler);
    cfg.service(settings_routes::update_navigation_handler);
    cfg.service(settings_routes::toggle_navigation_handler);
    cfg.service(settings_routes::delete_navigation_handler);
    cfg.service(settings_routes::get_palettes_handler);
    cfg.service(settings_routes::create_palette_handler);
    cfg.service(settings_routes::update_palette_handler);
    cfg.service(settings_routes::set_default_palette_handler);
    cfg.service(settings_routes::delete_palette_handler);

    // Journey + FAQs
    cfg.service(journey_routes::get_journey_handler);
    cfg.service(journey_routes::get_admin_journey_handler);
    cfg.service(journey_routes::create_journey_handler);
    cfg.service(journey_routes::update_journey_handler);
    cfg.service(journey_routes::delete_journey_handler);
    cfg.service(journey_routes::get_faqs_handler);
    cfg.service(journey_routes::get_admin_faqs_handler);
    cfg.service(journey_routes::create_faq_handler);
    cfg.service(journey_routes::update_faq_handler);
    cfg.service(journey_routes::delete_faq_handler);

    // Portfolio
    cfg.service(portfolio_routes::get_categories_handler);
    cfg.service(portfolio_routes::create_category_handler);
    cfg.service(portfolio_routes::update_category_handler);
    cfg.service(portfolio_routes::delete_category_handler);
    cfg.service(portfolio_routes::get_technologies_handler);
    cfg.service(portfolio_routes::get_top_skills_handler);
    cfg.service(portfolio_routes::create_technology_handler);
    cfg.service(portfolio_routes::update_technology_handler);
    cfg.service(portfolio_routes::delete_technology_handler);
    // Fixed path segments must register before the slug catch-all.
    cfg.service(portfolio_routes::get_featured_projects_handler);
    cfg.service(portfolio_routes::get_public_projects_handler);
    cfg.service(portfolio_routes::get_public_project_handler);
    cfg.service(portfolio_routes::get_admin_projects_handler);
    cfg.service(portfolio_routes::create_project_handler);
    cfg.service(portfolio_routes::update_project_handler);
    cfg.service(portfolio_routes::delete_project_handler);
    cfg.service(portfolio_routes::get_stats_handler);

    // Blog
    cfg.service(blog_routes::get_recent_posts_handler);
    cfg.service(blog_routes::get_public_posts_handler);
    cfg.service(blog_routes::get_public_post_handler);
    cfg.service(blog_routes::get_admin_posts_handler);
    cfg.service(blog_routes::create_post_handler);
    cfg.service(blog_routes::update_post_handler);
    cfg.service(blog_routes::delete_post_handler);

    // Testimonials
    cfg.service(testimonial_routes::get_testimonials_handler);
    cfg.service(testimonial_routes::get_admin_testimonials_handler);
    cfg.service(testimonial_routes::create_testimonial_handler);
    cfg.service(testimonial_routes::update_testimonial_handler);
    cfg.service(testimonial_routes::delete_testimonial_handler);

    // Services
    cfg.service(service_routes::get_featured_services_handler);
    cfg.service(service_routes::get_services_handler);
    cfg.service(service_routes::get_admin_services_handler);
    cfg.service(service_routes::create_service_handler);
    cfg.service(service_routes::update_service_handler);
    cfg.service(service_routes::delete_service_handler);

    // Contact
    cfg.service(contact_routes::submit_contact_handler);
    cfg.service(contact_routes::get_messages_handler);
    cfg.service(contact_routes::get_message_handler);
    cfg.service(contact_routes::update_message_status_handler);
    cfg.service(contact_routes::delete_message_handler);

    // Accounts
    cfg.service(accounts_routes::login_handler);
    cfg.service(accounts_routes::logout_handler);
    cfg.service(accounts_routes::get_profile_handler);
    cfg.service(accounts_routes::update_profile_handler);
    cfg.service(accounts_routes::get_recent_activity_handler);
    cfg.service(accounts_routes::get_sessions_handler);

    // CV download
    cfg.service(resume_routes::download_cv_handler);

    // OpenAPI
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}


