//! Builds an `AppState` backed by the in-memory stubs. Tests override
//! individual use-case slots before calling `build`.

use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::modules::accounts::application::ports::outgoing::credentials_repository::CredentialRecord;
use crate::modules::accounts::application::services::argon2_hasher::Argon2Hasher;
use crate::modules::accounts::application::services::password_hasher::PasswordHasher;
use crate::modules::accounts::application::use_cases::login_user::LoginUserUseCase;
use crate::modules::accounts::application::use_cases::logout_user::LogoutUserUseCase;
use crate::modules::accounts::application::use_cases::manage_profile::ManageProfileUseCase;
use crate::modules::accounts::application::use_cases::track_activity::TrackActivityUseCase;
use crate::modules::accounts::application::AccountsUseCases;
use crate::modules::blog::application::use_cases::get_public_post::GetPublicPostUseCase;
use crate::modules::blog::application::use_cases::list_posts::ListPostsUseCase;
use crate::modules::blog::application::use_cases::save_post::SavePostUseCase;
use crate::modules::blog::application::BlogUseCases;
use crate::modules::contact::application::ports::outgoing::NullContactNotifier;
use crate::modules::contact::application::use_cases::manage_messages::ManageMessagesUseCase;
use crate::modules::contact::application::use_cases::submit_message::SubmitMessageUseCase;
use crate::modules::contact::application::ContactUseCases;
use crate::modules::journey::application::use_cases::delete_journey::DeleteJourneyUseCase;
use crate::modules::journey::application::use_cases::list_faqs::ListFaqsUseCase;
use crate::modules::journey::application::use_cases::list_journey::ListJourneyUseCase;
use crate::modules::journey::application::use_cases::save_faq::SaveFaqUseCase;
use crate::modules::journey::application::use_cases::save_journey::SaveJourneyUseCase;
use crate::modules::journey::application::JourneyUseCases;
use crate::modules::portfolio::application::use_cases::get_public_project::GetPublicProjectUseCase;
use crate::modules::portfolio::application::use_cases::get_stats::GetStatsUseCase;
use crate::modules::portfolio::application::use_cases::list_categories::ListCategoriesUseCase;
use crate::modules::portfolio::application::use_cases::list_projects::ListProjectsUseCase;
use crate::modules::portfolio::application::use_cases::list_technologies::ListTechnologiesUseCase;
use crate::modules::portfolio::application::use_cases::save_category::SaveCategoryUseCase;
use crate::modules::portfolio::application::use_cases::save_project::SaveProjectUseCase;
use crate::modules::portfolio::application::use_cases::save_technology::SaveTechnologyUseCase;
use crate::modules::portfolio::application::PortfolioUseCases;
use crate::modules::resume::application::ports::outgoing::cv_notifier::NullCvNotifier;
use crate::modules::resume::application::use_cases::generate_cv::GenerateCvUseCase;
use crate::modules::resume::application::ResumeUseCases;
use crate::modules::service::application::use_cases::list_services::ListServicesUseCase;
use crate::modules::service::application::use_cases::save_service::SaveServiceUseCase;
use crate::modules::service::application::ServiceUseCases;
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
use crate::modules::testimonial::application::use_cases::list_testimonials::ListTestimonialsUseCase;
use crate::modules::testimonial::application::use_cases::save_testimonial::SaveTestimonialUseCase;
use crate::modules::testimonial::application::TestimonialUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Username and password accepted by the default-built login use case.
pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "correct horse";

pub struct TestAppStateBuilder {
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

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        // Settings
        let settings_repo = InMemorySettings::default();
        let navigation_repo = InMemoryNavigation::default();
        let palette_repo = InMemoryPalettes::default();
        let get_settings: Arc<dyn IGetSettingsUseCase> =
            Arc::new(GetSettingsUseCase::new(settings_repo.clone()));
        let save_navigation = Arc::new(SaveNavigationUseCase::new(navigation_repo.clone()));
        let save_palette = Arc::new(SavePaletteUseCase::new(palette_repo.clone()));
        let palette_admin = Arc::new(PaletteAdminUseCase::new(palette_repo.clone()));
        let navigation_admin = Arc::new(NavigationAdminUseCase::new(navigation_repo.clone()));
        let settings = SettingsUseCases {
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
        let journey_repo = InMemoryJourney::default();
        let faq_repo = InMemoryFaqs::default();
        let list_journey = Arc::new(ListJourneyUseCase::new(journey_repo.clone()));
        let save_journey = Arc::new(SaveJourneyUseCase::new(journey_repo.clone()));
        let save_faq = Arc::new(SaveFaqUseCase::new(faq_repo.clone()));
        let journey = JourneyUseCases {
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
        let category_repo = InMemoryCategories::default();
        let technology_repo = InMemoryTechnologies::default();
        let project_repo = InMemoryProjects::default();
        let save_category = Arc::new(SaveCategoryUseCase::new(category_repo.clone()));
        let save_technology = Arc::new(SaveTechnologyUseCase::new(technology_repo.clone()));
        let save_project = Arc::new(SaveProjectUseCase::new(project_repo.clone()));
        let list_projects = Arc::new(ListProjectsUseCase::new(project_repo.clone()));
        let public_project = Arc::new(GetPublicProjectUseCase::new(project_repo.clone()));
        let list_technologies = Arc::new(ListTechnologiesUseCase::new(technology_repo.clone()));
        let portfolio = PortfolioUseCases {
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
                FixedStatsCounts,
            )),
        };

        // Blog
        let blog_repo = InMemoryBlog::default();
        let list_posts = Arc::new(ListPostsUseCase::new(blog_repo.clone()));
        let save_post = Arc::new(SavePostUseCase::new(blog_repo.clone()));
        let blog = BlogUseCases {
            list_posts: list_posts.clone(),
            list_public_posts: list_posts.clone(),
            recent_posts: list_posts,
            get_public_post: Arc::new(GetPublicPostUseCase::new(blog_repo.clone())),
            create_post: save_post.clone(),
            update_post: save_post.clone(),
            delete_post: save_post,
        };

        // Testimonials
        let testimonial_repo = InMemoryTestimonials::default();
        let save_testimonial = Arc::new(SaveTestimonialUseCase::new(testimonial_repo.clone()));
        let testimonial = TestimonialUseCases {
            list_testimonials: Arc::new(ListTestimonialsUseCase::new(testimonial_repo.clone())),
            create_testimonial: save_testimonial.clone(),
            update_testimonial: save_testimonial.clone(),
            delete_testimonial: save_testimonial,
        };

        // Services
        let service_repo = InMemoryServices::default();
        let list_services = Arc::new(ListServicesUseCase::new(service_repo.clone()));
        let save_service = Arc::new(SaveServiceUseCase::new(service_repo.clone()));
        let service = ServiceUseCases {
            list_services: list_services.clone(),
            featured_services: list_services,
            create_service: save_service.clone(),
            update_service: save_service.clone(),
            delete_service: save_service,
        };

        // Contact
        let contact_repo = InMemoryContact::default();
        let manage_messages = Arc::new(ManageMessagesUseCase::new(contact_repo.clone()));
        let contact = ContactUseCases {
            submit_message: Arc::new(SubmitMessageUseCase::new(
                contact_repo.clone(),
                Arc::clone(&get_settings),
                Arc::new(NullContactNotifier),
            )),
            list_messages: manage_messages.clone(),
            get_message: manage_messages.clone(),
            update_message_status: manage_messages.clone(),
            delete_message: manage_messages,
        };

        // Accounts
        let hasher = Argon2Hasher;
        let password_hash = hasher
            .hash_password(TEST_PASSWORD)
            .expect("test password hash");
        let credentials_repo = SeededCredentials::new(vec![CredentialRecord {
            user_id: Uuid::new_v4(),
            username: TEST_USERNAME.to_string(),
            password_hash,
        }]);
        let profile_repo = InMemoryProfiles::default();
        let tracking_repo = InMemoryTracking::default();
        let manage_profile = Arc::new(ManageProfileUseCase::new(
            profile_repo.clone(),
            tracking_repo.clone(),
        ));
        let track_activity = Arc::new(TrackActivityUseCase::new(tracking_repo.clone()));
        let accounts = AccountsUseCases {
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
        let resume = ResumeUseCases {
            generate_cv: Arc::new(GenerateCvUseCase::new(
                get_settings,
                Arc::new(ListJourneyUseCase::new(journey_repo)),
                Arc::new(NoPdfEngine),
                Arc::new(NullCvNotifier),
            )),
        };

        Self {
            settings,
            journey,
            portfolio,
            blog,
            testimonial,
            service,
            contact,
            accounts,
            resume,
        }
    }
}

impl TestAppStateBuilder {
    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            settings: self.settings,
            journey: self.journey,
            portfolio: self.portfolio,
            blog: self.blog,
            testimonial: self.testimonial,
            service: self.service,
            contact: self.contact,
            accounts: self.accounts,
            resume: self.resume,
        })
    }
}
