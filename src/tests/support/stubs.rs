//! In-memory doubles for the outgoing ports. Route tests wire these
//! behind the real use cases so validation and mapping run unchanged.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use crate::modules::accounts::application::domain::entities::{
    UserActivity, UserProfile, UserSession,
};
use crate::modules::accounts::application::ports::outgoing::credentials_repository::{
    CredentialRecord, CredentialsRepository, CredentialsRepositoryError,
};
use crate::modules::accounts::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};
use crate::modules::accounts::application::ports::outgoing::tracking_repository::{
    CreateSessionData, LoginAttemptData, RecordActivityData, TrackingRepository,
    TrackingRepositoryError,
};
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::{
    BlogRepository, BlogRepositoryError, CreatePostData, PostFilter, UpdatePostData,
};
use crate::modules::contact::application::domain::entities::{ContactMessage, MessageStatus};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, CreateMessageData,
};
use crate::modules::journey::application::domain::entities::{FaqItem, JourneyEntry};
use crate::modules::journey::application::ports::outgoing::{
    CreateFaqData, CreateJourneyData, FaqRepository, FaqRepositoryError, JourneyFilter,
    JourneyRepository, JourneyRepositoryError, UpdateFaqData, UpdateJourneyData,
};
use crate::modules::portfolio::application::domain::entities::{
    Category, Project, Technology, TypeCount,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData, CreateProjectData,
    CreateTechnologyData, ProjectFilter, ProjectRepository, ProjectRepositoryError,
    StatsCountsRepository, StatsRepositoryError, TechnologyRepository, TechnologyRepositoryError,
    UpdateCategoryData, UpdateProjectData, UpdateTechnologyData,
};
use crate::modules::resume::application::ports::outgoing::pdf_engine::{PdfEngine, PdfEngineError};
use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::outgoing::{
    CreateServiceData, ServiceRepository, ServiceRepositoryError, UpdateServiceData,
};
use crate::modules::settings::application::domain::entities::{
    ColorPalette, NavigationItem, SiteSettings,
};
use crate::modules::settings::application::ports::outgoing::{
    CreateNavigationData, CreatePaletteData, NavigationRepository, NavigationRepositoryError,
    PaletteRepository, PaletteRepositoryError, SettingsRepository, SettingsRepositoryError,
    UpdateNavigationData, UpdatePaletteData, UpdateSettingsData,
};
use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::modules::testimonial::application::ports::outgoing::{
    CreateTestimonialData, TestimonialRepository, TestimonialRepositoryError,
    UpdateTestimonialData,
};

fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

// ---------------------------------------------------------------- settings

#[derive(Clone, Default)]
pub struct InMemorySettings {
    row: Arc<Mutex<SiteSettings>>,
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn get_or_create(&self) -> Result<SiteSettings, SettingsRepositoryError> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn update(
        &self,
        data: UpdateSettingsData,
    ) -> Result<SiteSettings, SettingsRepositoryError> {
        let mut row = self.row.lock().unwrap();
        if let Some(v) = data.site_name {
            row.site_name = v;
        }
        if let Some(v) = data.site_tagline {
            row.site_tagline = v;
        }
        if let Some(v) = data.site_description {
            row.site_description = v;
        }
        if let Some(v) = data.site_url {
            row.site_url = v;
        }
        if let Some(v) = data.owner_name {
            row.owner_name = v;
        }
        if let Some(v) = data.owner_title {
            row.owner_title = v;
        }
        if let Some(v) = data.owner_bio {
            row.owner_bio = v;
        }
        if let Some(v) = data.active_theme {
            row.active_theme = v;
        }
        if let Some(v) = data.default_mode {
            row.default_mode = v;
        }
        if let Some(v) = data.email {
            row.email = v;
        }
        if let Some(v) = data.phone {
            row.phone = v;
        }
        if let Some(v) = data.location {
            row.location = v;
        }
        if let Some(v) = data.meta_title {
            row.meta_title = v;
        }
        if let Some(v) = data.meta_description {
            row.meta_description = v;
        }
        if let Some(v) = data.meta_keywords {
            row.meta_keywords = v;
        }
        if let Some(v) = data.google_analytics_id {
            row.google_analytics_id = v;
        }
        if let Some(v) = data.github_url {
            row.github_url = v;
        }
        if let Some(v) = data.linkedin_url {
            row.linkedin_url = v;
        }
        if let Some(v) = data.twitter_url {
            row.twitter_url = v;
        }
        if let Some(v) = data.instagram_url {
            row.instagram_url = v;
        }
        if let Some(v) = data.enable_blog {
            row.enable_blog = v;
        }
        if let Some(v) = data.enable_testimonials {
            row.enable_testimonials = v;
        }
        if let Some(v) = data.enable_contact_form {
            row.enable_contact_form = v;
        }
        if let Some(v) = data.enable_animations {
            row.enable_animations = v;
        }
        if let Some(v) = data.skills_expertise {
            row.skills_expertise = v;
        }
        row.updated_at = now();
        Ok(row.clone())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryNavigation {
    items: Arc<Mutex<Vec<NavigationItem>>>,
}

#[async_trait]
impl NavigationRepository for InMemoryNavigation {
    async fn list(
        &self,
        only_active: bool,
    ) -> Result<Vec<NavigationItem>, NavigationRepositoryError> {
        let mut items: Vec<NavigationItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| !only_active || i.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
        Ok(items)
    }

    async fn create(
        &self,
        data: CreateNavigationData,
    ) -> Result<NavigationItem, NavigationRepositoryError> {
        let item = NavigationItem {
            id: Uuid::new_v4(),
            title: data.title,
            url: data.url,
            icon: data.icon,
            order: data.order,
            is_active: data.is_active,
            is_external: data.is_external,
            created_at: now(),
            updated_at: now(),
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateNavigationData,
    ) -> Result<NavigationItem, NavigationRepositoryError> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(NavigationRepositoryError::NotFound)?;
        if let Some(v) = data.title {
            item.title = v;
        }
        if let Some(v) = data.url {
            item.url = v;
        }
        if let Some(v) = data.icon {
            item.icon = v;
        }
        if let Some(v) = data.order {
            item.order = v;
        }
        if let Some(v) = data.is_active {
            item.is_active = v;
        }
        if let Some(v) = data.is_external {
            item.is_external = v;
        }
        item.updated_at = now();
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), NavigationRepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(NavigationRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_active(&self, id: Uuid) -> Result<bool, NavigationRepositoryError> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(NavigationRepositoryError::NotFound)?;
        item.is_active = !item.is_active;
        item.updated_at = now();
        Ok(item.is_active)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPalettes {
    palettes: Arc<Mutex<Vec<ColorPalette>>>,
}

#[async_trait]
impl PaletteRepository for InMemoryPalettes {
    async fn list(&self) -> Result<Vec<ColorPalette>, PaletteRepositoryError> {
        Ok(self.palettes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ColorPalette>, PaletteRepositoryError> {
        Ok(self
            .palettes
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(
        &self,
        data: CreatePaletteData,
    ) -> Result<ColorPalette, PaletteRepositoryError> {
        let mut palettes = self.palettes.lock().unwrap();
        if palettes
            .iter()
            .any(|p| p.name == data.name || p.slug == data.slug)
        {
            return Err(PaletteRepositoryError::NameTaken);
        }
        if data.is_default {
            for p in palettes.iter_mut() {
                p.is_default = false;
            }
        }
        let palette = ColorPalette {
            id: Uuid::new_v4(),
            name: data.name,
            slug: data.slug,
            light: data.light,
            dark: data.dark,
            is_active: data.is_active,
            is_default: data.is_default,
            created_at: now(),
            updated_at: now(),
        };
        palettes.push(palette.clone());
        Ok(palette)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdatePaletteData,
    ) -> Result<ColorPalette, PaletteRepositoryError> {
        let mut palettes = self.palettes.lock().unwrap();
        let palette = palettes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PaletteRepositoryError::NotFound)?;
        if let Some(v) = data.name {
            palette.name = v;
        }
        if let Some(v) = data.light {
            palette.light = v;
        }
        if let Some(v) = data.dark {
            palette.dark = v;
        }
        if let Some(v) = data.is_active {
            palette.is_active = v;
        }
        palette.updated_at = now();
        Ok(palette.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), PaletteRepositoryError> {
        let mut palettes = self.palettes.lock().unwrap();
        let before = palettes.len();
        palettes.retain(|p| p.id != id);
        if palettes.len() == before {
            return Err(PaletteRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_default(&self, id: Uuid) -> Result<ColorPalette, PaletteRepositoryError> {
        let mut palettes = self.palettes.lock().unwrap();
        if !palettes.iter().any(|p| p.id == id) {
            return Err(PaletteRepositoryError::NotFound);
        }
        for p in palettes.iter_mut() {
            p.is_default = p.id == id;
        }
        Ok(palettes.iter().find(|p| p.id == id).cloned().unwrap())
    }
}

// ----------------------------------------------------------------- journey

#[derive(Clone, Default)]
pub struct InMemoryJourney {
    entries: Arc<Mutex<Vec<JourneyEntry>>>,
}

#[async_trait]
impl JourneyRepository for InMemoryJourney {
    async fn list(
        &self,
        filter: JourneyFilter,
    ) -> Result<Vec<JourneyEntry>, JourneyRepositoryError> {
        let mut entries: Vec<JourneyEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| filter.entry_type.is_none() || filter.entry_type == Some(e.entry_type))
            .filter(|e| !filter.only_active || e.is_active)
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.order.cmp(&b.order))
        });
        Ok(entries)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JourneyEntry>, JourneyRepositoryError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create(
        &self,
        data: CreateJourneyData,
    ) -> Result<JourneyEntry, JourneyRepositoryError> {
        let entry = JourneyEntry {
            id: Uuid::new_v4(),
            entry_type: data.entry_type,
            title: data.title,
            organization: data.organization,
            location: data.location,
            start_date: data.start_date,
            end_date: data.end_date,
            is_current: data.is_current,
            description: data.description,
            achievements: data.achievements,
            technologies: data.technologies,
            is_active: data.is_active,
            order: data.order,
            created_at: now(),
            updated_at: now(),
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateJourneyData,
    ) -> Result<JourneyEntry, JourneyRepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(JourneyRepositoryError::NotFound)?;
        if let Some(v) = data.entry_type {
            entry.entry_type = v;
        }
        if let Some(v) = data.title {
            entry.title = v;
        }
        if let Some(v) = data.organization {
            entry.organization = v;
        }
        if let Some(v) = data.location {
            entry.location = v;
        }
        if let Some(v) = data.start_date {
            entry.start_date = v;
        }
        if let Some(v) = data.end_date {
            entry.end_date = v;
        }
        if let Some(v) = data.is_current {
            entry.is_current = v;
        }
        if let Some(v) = data.description {
            entry.description = v;
        }
        if let Some(v) = data.achievements {
            entry.achievements = v;
        }
        if let Some(v) = data.technologies {
            entry.technologies = v;
        }
        if let Some(v) = data.is_active {
            entry.is_active = v;
        }
        if let Some(v) = data.order {
            entry.order = v;
        }
        entry.updated_at = now();
        Ok(entry.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), JourneyRepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(JourneyRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryFaqs {
    items: Arc<Mutex<Vec<FaqItem>>>,
}

#[async_trait]
impl FaqRepository for InMemoryFaqs {
    async fn list(&self, only_active: bool) -> Result<Vec<FaqItem>, FaqRepositoryError> {
        let mut items: Vec<FaqItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| !only_active || i.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| a.question.cmp(&b.question))
        });
        Ok(items)
    }

    async fn create(&self, data: CreateFaqData) -> Result<FaqItem, FaqRepositoryError> {
        let item = FaqItem {
            id: Uuid::new_v4(),
            question: data.question,
            answer: data.answer,
            order: data.order,
            is_active: data.is_active,
            created_at: now(),
            updated_at: now(),
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: Uuid, data: UpdateFaqData) -> Result<FaqItem, FaqRepositoryError> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(FaqRepositoryError::NotFound)?;
        if let Some(v) = data.question {
            item.question = v;
        }
        if let Some(v) = data.answer {
            item.answer = v;
        }
        if let Some(v) = data.order {
            item.order = v;
        }
        if let Some(v) = data.is_active {
            item.is_active = v;
        }
        item.updated_at = now();
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), FaqRepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(FaqRepositoryError::NotFound);
        }
        Ok(())
    }
}

// --------------------------------------------------------------- portfolio

#[derive(Clone, Default)]
pub struct InMemoryCategories {
    categories: Arc<Mutex<Vec<Category>>>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create(&self, data: CreateCategoryData) -> Result<Category, CategoryRepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        if categories
            .iter()
            .any(|c| c.name == data.name || c.slug == data.slug)
        {
            return Err(CategoryRepositoryError::NameTaken);
        }
        let category = Category {
            id: Uuid::new_v4(),
            name: data.name,
            slug: data.slug,
            description: data.description,
            color: data.color,
            icon: data.icon,
            created_at: now(),
            updated_at: now(),
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CategoryRepositoryError::NotFound)?;
        if let Some(v) = data.name {
            category.name = v;
        }
        if let Some(v) = data.slug {
            category.slug = v;
        }
        if let Some(v) = data.description {
            category.description = v;
        }
        if let Some(v) = data.color {
            category.color = v;
        }
        if let Some(v) = data.icon {
            category.icon = v;
        }
        category.updated_at = now();
        Ok(category.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(CategoryRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTechnologies {
    technologies: Arc<Mutex<Vec<Technology>>>,
}

#[async_trait]
impl TechnologyRepository for InMemoryTechnologies {
    async fn list(&self) -> Result<Vec<Technology>, TechnologyRepositoryError> {
        let mut technologies = self.technologies.lock().unwrap().clone();
        technologies.sort_by(|a, b| {
            b.proficiency
                .cmp(&a.proficiency)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(technologies)
    }

    async fn top_skills(
        &self,
        min_proficiency: i16,
        limit: u64,
    ) -> Result<Vec<Technology>, TechnologyRepositoryError> {
        let mut technologies: Vec<Technology> = self
            .technologies
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.proficiency >= min_proficiency)
            .cloned()
            .collect();
        technologies.sort_by(|a, b| {
            b.proficiency
                .cmp(&a.proficiency)
                .then_with(|| a.name.cmp(&b.name))
        });
        technologies.truncate(limit as usize);
        Ok(technologies)
    }

    async fn create(
        &self,
        data: CreateTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let mut technologies = self.technologies.lock().unwrap();
        if technologies
            .iter()
            .any(|t| t.name == data.name || t.slug == data.slug)
        {
            return Err(TechnologyRepositoryError::NameTaken);
        }
        let technology = Technology {
            id: Uuid::new_v4(),
            name: data.name,
            slug: data.slug,
            description: data.description,
            icon: data.icon,
            website_url: data.website_url,
            proficiency: data.proficiency,
            years_experience: data.years_experience,
            created_at: now(),
            updated_at: now(),
        };
        technologies.push(technology.clone());
        Ok(technology)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let mut technologies = self.technologies.lock().unwrap();
        let technology = technologies
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TechnologyRepositoryError::NotFound)?;
        if let Some(v) = data.name {
            technology.name = v;
        }
        if let Some(v) = data.slug {
            technology.slug = v;
        }
        if let Some(v) = data.description {
            technology.description = v;
        }
        if let Some(v) = data.icon {
            technology.icon = v;
        }
        if let Some(v) = data.website_url {
            technology.website_url = v;
        }
        if let Some(v) = data.proficiency {
            technology.proficiency = v;
        }
        if let Some(v) = data.years_experience {
            technology.years_experience = v;
        }
        technology.updated_at = now();
        Ok(technology.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyRepositoryError> {
        let mut technologies = self.technologies.lock().unwrap();
        let before = technologies.len();
        technologies.retain(|t| t.id != id);
        if technologies.len() == before {
            return Err(TechnologyRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProjects {
    projects: Arc<Mutex<Vec<Project>>>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut projects: Vec<Project> = self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                filter
                    .statuses
                    .as_ref()
                    .map_or(true, |statuses| statuses.contains(&p.status))
            })
            .filter(|p| {
                filter
                    .project_type
                    .map_or(true, |project_type| p.project_type == project_type)
            })
            .filter(|p| {
                filter.category_slug.as_ref().map_or(true, |slug| {
                    p.category.as_ref().map(|c| c.slug.as_str()) == Some(slug.as_str())
                })
            })
            .filter(|p| {
                filter
                    .technology_slug
                    .as_ref()
                    .map_or(true, |slug| p.technologies.iter().any(|t| &t.slug == slug))
            })
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn featured(&self, limit: u64) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut projects: Vec<Project> = self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_featured && p.status.is_public())
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects.truncate(limit as usize);
        Ok(projects)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        if projects.iter().any(|p| p.slug == data.slug) {
            return Err(ProjectRepositoryError::SlugTaken);
        }
        let project = Project {
            id: Uuid::new_v4(),
            title: data.title,
            slug: data.slug,
            description: data.description,
            detailed_description: data.detailed_description,
            project_type: data.project_type,
            status: data.status,
            category: None,
            technologies: vec![],
            featured_image: data.featured_image,
            gallery: data.gallery,
            live_url: data.live_url,
            github_url: data.github_url,
            documentation_url: data.documentation_url,
            start_date: data.start_date,
            end_date: data.end_date,
            client: data.client,
            team_size: data.team_size,
            key_features: data.key_features,
            challenges: data.challenges,
            solutions: data.solutions,
            results: data.results,
            meta_title: data.meta_title,
            meta_description: data.meta_description,
            is_featured: data.is_featured,
            created_at: now(),
            updated_at: now(),
        };
        projects.push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        if let Some(v) = data.title {
            project.title = v;
        }
        if let Some(v) = data.slug {
            project.slug = v;
        }
        if let Some(v) = data.description {
            project.description = v;
        }
        if let Some(v) = data.detailed_description {
            project.detailed_description = v;
        }
        if let Some(v) = data.project_type {
            project.project_type = v;
        }
        if let Some(v) = data.status {
            project.status = v;
        }
        if let Some(v) = data.featured_image {
            project.featured_image = v;
        }
        if let Some(v) = data.gallery {
            project.gallery = v;
        }
        if let Some(v) = data.live_url {
            project.live_url = v;
        }
        if let Some(v) = data.github_url {
            project.github_url = v;
        }
        if let Some(v) = data.documentation_url {
            project.documentation_url = v;
        }
        if let Some(v) = data.start_date {
            project.start_date = v;
        }
        if let Some(v) = data.end_date {
            project.end_date = v;
        }
        if let Some(v) = data.client {
            project.client = v;
        }
        if let Some(v) = data.team_size {
            project.team_size = v;
        }
        if let Some(v) = data.key_features {
            project.key_features = v;
        }
        if let Some(v) = data.challenges {
            project.challenges = v;
        }
        if let Some(v) = data.solutions {
            project.solutions = v;
        }
        if let Some(v) = data.results {
            project.results = v;
        }
        if let Some(v) = data.meta_title {
            project.meta_title = v;
        }
        if let Some(v) = data.meta_description {
            project.meta_description = v;
        }
        if let Some(v) = data.is_featured {
            project.is_featured = v;
        }
        project.updated_at = now();
        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count_public(&self) -> Result<i64, ProjectRepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.status.is_public())
            .count() as i64)
    }

    async fn count_featured(&self) -> Result<i64, ProjectRepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_featured && p.status.is_public())
            .count() as i64)
    }

    async fn count_by_type(&self) -> Result<Vec<TypeCount>, ProjectRepositoryError> {
        let projects = self.projects.lock().unwrap();
        let mut counts = Vec::new();
        for project in projects.iter().filter(|p| p.status.is_public()) {
            match counts
                .iter_mut()
                .find(|c: &&mut TypeCount| c.project_type == project.project_type)
            {
                Some(count) => count.count += 1,
                None => counts.push(TypeCount {
                    project_type: project.project_type,
                    count: 1,
                }),
            }
        }
        Ok(counts)
    }
}

/// Fixed cross-module counts for the stats endpoint.
#[derive(Clone, Default)]
pub struct FixedStatsCounts;

#[async_trait]
impl StatsCountsRepository for FixedStatsCounts {
    async fn published_post_count(&self) -> Result<i64, StatsRepositoryError> {
        Ok(0)
    }

    async fn active_service_count(&self) -> Result<i64, StatsRepositoryError> {
        Ok(0)
    }

    async fn technology_count(&self) -> Result<i64, StatsRepositoryError> {
        Ok(0)
    }
}

// -------------------------------------------------------------------- blog

#[derive(Clone, Default)]
pub struct InMemoryBlog {
    posts: Arc<Mutex<Vec<BlogPost>>>,
}

#[async_trait]
impl BlogRepository for InMemoryBlog {
    async fn list(&self, filter: PostFilter) -> Result<Vec<BlogPost>, BlogRepositoryError> {
        let mut posts: Vec<BlogPost> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                filter
                    .statuses
                    .as_ref()
                    .map_or(true, |statuses| statuses.contains(&p.status))
            })
            .filter(|p| {
                filter.category_slug.as_ref().map_or(true, |slug| {
                    p.category.as_ref().map(|c| c.slug.as_str()) == Some(slug.as_str())
                })
            })
            .filter(|p| {
                filter
                    .tag
                    .as_ref()
                    .map_or(true, |tag| p.tag_list().iter().any(|t| t == tag))
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = filter.limit {
            posts.truncate(limit as usize);
        }
        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, BlogRepositoryError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn increment_views(&self, id: Uuid) -> Result<i64, BlogRepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BlogRepositoryError::NotFound)?;
        post.views_count += 1;
        Ok(post.views_count)
    }

    async fn create(&self, data: CreatePostData) -> Result<BlogPost, BlogRepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == data.slug) {
            return Err(BlogRepositoryError::SlugTaken);
        }
        let published_at = data.status.is_public().then(now);
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: data.title,
            slug: data.slug,
            excerpt: data.excerpt,
            content: data.content,
            author_id: data.author_id,
            category: None,
            tags: data.tags,
            status: data.status,
            featured_image: data.featured_image,
            meta_title: data.meta_title,
            meta_description: data.meta_description,
            views_count: 0,
            reading_time: data.reading_time,
            published_at,
            created_at: now(),
            updated_at: now(),
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdatePostData,
    ) -> Result<BlogPost, BlogRepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BlogRepositoryError::NotFound)?;
        if let Some(v) = data.title {
            post.title = v;
        }
        if let Some(v) = data.slug {
            post.slug = v;
        }
        if let Some(v) = data.excerpt {
            post.excerpt = v;
        }
        if let Some(v) = data.content {
            post.content = v;
        }
        if let Some(v) = data.author_id {
            post.author_id = v;
        }
        if let Some(v) = data.tags {
            post.tags = v;
        }
        if let Some(v) = data.status {
            post.status = v;
            if post.status.is_public() && post.published_at.is_none() {
                post.published_at = Some(now());
            }
        }
        if let Some(v) = data.featured_image {
            post.featured_image = v;
        }
        if let Some(v) = data.meta_title {
            post.meta_title = v;
        }
        if let Some(v) = data.meta_description {
            post.meta_description = v;
        }
        if let Some(v) = data.reading_time {
            post.reading_time = v;
        }
        post.updated_at = now();
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(BlogRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ------------------------------------------------- testimonials / services

#[derive(Clone, Default)]
pub struct InMemoryTestimonials {
    testimonials: Arc<Mutex<Vec<Testimonial>>>,
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonials {
    async fn list(
        &self,
        only_approved: bool,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
        let mut testimonials: Vec<Testimonial> = self
            .testimonials
            .lock()
            .unwrap()
            .iter()
            .filter(|t| !only_approved || t.is_approved)
            .cloned()
            .collect();
        testimonials.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(testimonials)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Testimonial>, TestimonialRepositoryError> {
        Ok(self
            .testimonials
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn create(
        &self,
        data: CreateTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let testimonial = Testimonial {
            id: Uuid::new_v4(),
            client_name: data.client_name,
            client_position: data.client_position,
            client_company: data.client_company,
            client_email: data.client_email,
            client_photo: data.client_photo,
            content: data.content,
            rating: data.rating,
            project_id: data.project_id,
            is_featured: data.is_featured,
            is_approved: data.is_approved,
            created_at: now(),
            updated_at: now(),
        };
        self.testimonials.lock().unwrap().push(testimonial.clone());
        Ok(testimonial)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let mut testimonials = self.testimonials.lock().unwrap();
        let testimonial = testimonials
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TestimonialRepositoryError::NotFound)?;
        if let Some(v) = data.client_name {
            testimonial.client_name = v;
        }
        if let Some(v) = data.client_position {
            testimonial.client_position = v;
        }
        if let Some(v) = data.client_company {
            testimonial.client_company = v;
        }
        if let Some(v) = data.client_email {
            testimonial.client_email = v;
        }
        if let Some(v) = data.client_photo {
            testimonial.client_photo = v;
        }
        if let Some(v) = data.content {
            testimonial.content = v;
        }
        if let Some(v) = data.rating {
            testimonial.rating = v;
        }
        if let Some(v) = data.project_id {
            testimonial.project_id = v;
        }
        if let Some(v) = data.is_featured {
            testimonial.is_featured = v;
        }
        if let Some(v) = data.is_approved {
            testimonial.is_approved = v;
        }
        testimonial.updated_at = now();
        Ok(testimonial.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let mut testimonials = self.testimonials.lock().unwrap();
        let before = testimonials.len();
        testimonials.retain(|t| t.id != id);
        if testimonials.len() == before {
            return Err(TestimonialRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryServices {
    services: Arc<Mutex<Vec<ServiceOffering>>>,
}

#[async_trait]
impl ServiceRepository for InMemoryServices {
    async fn list(
        &self,
        only_active: bool,
    ) -> Result<Vec<ServiceOffering>, ServiceRepositoryError> {
        let mut services: Vec<ServiceOffering> = self
            .services
            .lock()
            .unwrap()
            .iter()
            .filter(|s| !only_active || s.is_active)
            .cloned()
            .collect();
        services.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(services)
    }

    async fn featured(&self) -> Result<Vec<ServiceOffering>, ServiceRepositoryError> {
        let mut services: Vec<ServiceOffering> = self
            .services
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_active && s.is_featured)
            .cloned()
            .collect();
        services.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(services)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ServiceOffering>, ServiceRepositoryError> {
        Ok(self
            .services
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create(
        &self,
        data: CreateServiceData,
    ) -> Result<ServiceOffering, ServiceRepositoryError> {
        let mut services = self.services.lock().unwrap();
        if services.iter().any(|s| s.slug == data.slug) {
            return Err(ServiceRepositoryError::SlugTaken);
        }
        let service = ServiceOffering {
            id: Uuid::new_v4(),
            name: data.name,
            slug: data.slug,
            description: data.description,
            short_description: data.short_description,
            icon: data.icon,
            delivery_time: data.delivery_time,
            features: data.features,
            process_steps: data.process_steps,
            starting_price: data.starting_price,
            price_unit: data.price_unit,
            is_active: data.is_active,
            is_featured: data.is_featured,
            order: data.order,
            created_at: now(),
            updated_at: now(),
        };
        services.push(service.clone());
        Ok(service)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateServiceData,
    ) -> Result<ServiceOffering, ServiceRepositoryError> {
        let mut services = self.services.lock().unwrap();
        let service = services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ServiceRepositoryError::NotFound)?;
        if let Some(v) = data.name {
            service.name = v;
        }
        if let Some(v) = data.slug {
            service.slug = v;
        }
        if let Some(v) = data.description {
            service.description = v;
        }
        if let Some(v) = data.short_description {
            service.short_description = v;
        }
        if let Some(v) = data.icon {
            service.icon = v;
        }
        if let Some(v) = data.delivery_time {
            service.delivery_time = v;
        }
        if let Some(v) = data.features {
            service.features = v;
        }
        if let Some(v) = data.process_steps {
            service.process_steps = v;
        }
        if let Some(v) = data.starting_price {
            service.starting_price = v;
        }
        if let Some(v) = data.price_unit {
            service.price_unit = v;
        }
        if let Some(v) = data.is_active {
            service.is_active = v;
        }
        if let Some(v) = data.is_featured {
            service.is_featured = v;
        }
        if let Some(v) = data.order {
            service.order = v;
        }
        service.updated_at = now();
        Ok(service.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceRepositoryError> {
        let mut services = self.services.lock().unwrap();
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Err(ServiceRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ----------------------------------------------------------------- contact

#[derive(Clone, Default)]
pub struct InMemoryContact {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

#[async_trait]
impl ContactRepository for InMemoryContact {
    async fn list(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let mut messages: Vec<ContactMessage> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| status.is_none() || status == Some(m.status))
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessage>, ContactRepositoryError> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn create(
        &self,
        data: CreateMessageData,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            company: data.company,
            subject: data.subject,
            message: data.message,
            service_interest_id: data.service_interest_id,
            status: MessageStatus::New,
            ip_address: data.ip_address,
            user_agent: data.user_agent,
            created_at: now(),
            updated_at: now(),
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ContactRepositoryError::NotFound)?;
        message.status = status;
        message.updated_at = now();
        Ok(message.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------- accounts

/// Credential store seeded at build time; lookups never hit a database.
#[derive(Clone, Default)]
pub struct SeededCredentials {
    records: Arc<Vec<CredentialRecord>>,
}

impl SeededCredentials {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

#[async_trait]
impl CredentialsRepository for SeededCredentials {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, CredentialsRepositoryError> {
        Ok(self
            .records
            .iter()
            .find(|r| r.username == username)
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    profiles: Arc<Mutex<Vec<UserProfile>>>,
}

fn blank_profile(user_id: Uuid) -> UserProfile {
    UserProfile {
        user_id,
        bio: String::new(),
        location: String::new(),
        website: String::new(),
        profile_image: String::new(),
        github_url: String::new(),
        linkedin_url: String::new(),
        twitter_url: String::new(),
        job_title: String::new(),
        company: String::new(),
        experience_years: 0,
        email_notifications: true,
        activity_alerts: true,
        created_at: now(),
        updated_at: now(),
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn get_or_create(&self, user_id: Uuid) -> Result<UserProfile, ProfileRepositoryError> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(profile) = profiles.iter().find(|p| p.user_id == user_id) {
            return Ok(profile.clone());
        }
        let profile = blank_profile(user_id);
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        let mut profiles = self.profiles.lock().unwrap();
        if !profiles.iter().any(|p| p.user_id == user_id) {
            profiles.push(blank_profile(user_id));
        }
        let profile = profiles
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or(ProfileRepositoryError::NotFound)?;
        if let Some(v) = data.bio {
            profile.bio = v;
        }
        if let Some(v) = data.location {
            profile.location = v;
        }
        if let Some(v) = data.website {
            profile.website = v;
        }
        if let Some(v) = data.profile_image {
            profile.profile_image = v;
        }
        if let Some(v) = data.github_url {
            profile.github_url = v;
        }
        if let Some(v) = data.linkedin_url {
            profile.linkedin_url = v;
        }
        if let Some(v) = data.twitter_url {
            profile.twitter_url = v;
        }
        if let Some(v) = data.job_title {
            profile.job_title = v;
        }
        if let Some(v) = data.company {
            profile.company = v;
        }
        if let Some(v) = data.experience_years {
            profile.experience_years = v;
        }
        if let Some(v) = data.email_notifications {
            profile.email_notifications = v;
        }
        if let Some(v) = data.activity_alerts {
            profile.activity_alerts = v;
        }
        profile.updated_at = now();
        Ok(profile.clone())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTracking {
    attempts: Arc<Mutex<Vec<LoginAttemptData>>>,
    sessions: Arc<Mutex<Vec<UserSession>>>,
    activities: Arc<Mutex<Vec<UserActivity>>>,
}

#[async_trait]
impl TrackingRepository for InMemoryTracking {
    async fn record_login_attempt(
        &self,
        data: LoginAttemptData,
    ) -> Result<(), TrackingRepositoryError> {
        self.attempts.lock().unwrap().push(data);
        Ok(())
    }

    async fn create_session(
        &self,
        data: CreateSessionData,
    ) -> Result<UserSession, TrackingRepositoryError> {
        let session = UserSession {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            session_key: data.session_key,
            ip_address: data.ip_address.unwrap_or_default(),
            user_agent: data.user_agent.unwrap_or_default(),
            is_active: true,
            created_at: now(),
            last_activity: now(),
        };
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn find_session(
        &self,
        session_key: &str,
    ) -> Result<Option<UserSession>, TrackingRepositoryError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_key == session_key)
            .cloned())
    }

    async fn touch_session(&self, session_key: &str) -> Result<(), TrackingRepositoryError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .iter_mut()
            .find(|s| s.session_key == session_key && s.is_active)
            .ok_or(TrackingRepositoryError::SessionNotFound)?;
        session.last_activity = now();
        Ok(())
    }

    async fn close_session(&self, session_key: &str) -> Result<(), TrackingRepositoryError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .iter_mut()
            .find(|s| s.session_key == session_key)
            .ok_or(TrackingRepositoryError::SessionNotFound)?;
        session.is_active = false;
        session.last_activity = now();
        Ok(())
    }

    async fn list_sessions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserSession>, TrackingRepositoryError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn record_activity(
        &self,
        data: RecordActivityData,
    ) -> Result<(), TrackingRepositoryError> {
        let activity = UserActivity {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            action: data.action,
            description: data.description.unwrap_or_default(),
            ip_address: data.ip_address.unwrap_or_default(),
            user_agent: data.user_agent.unwrap_or_default(),
            referer: data.referer.unwrap_or_default(),
            metadata: data.metadata,
            created_at: now(),
        };
        self.activities.lock().unwrap().push(activity);
        Ok(())
    }

    async fn recent_activity(
        &self,
        limit: u64,
    ) -> Result<Vec<UserActivity>, TrackingRepositoryError> {
        let mut activities = self.activities.lock().unwrap().clone();
        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        activities.truncate(limit as usize);
        Ok(activities)
    }
}

// ------------------------------------------------------------------ resume

/// Always reports the renderer as missing, which pushes the CV use case
/// down the printable HTML path.
pub struct NoPdfEngine;

#[async_trait]
impl PdfEngine for NoPdfEngine {
    async fn render(&self, _html: &str) -> Result<Vec<u8>, PdfEngineError> {
        Err(PdfEngineError::Unavailable)
    }
}
