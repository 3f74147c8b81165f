use std::sync::Arc;

use crate::modules::portfolio::application::use_cases::get_public_project::{
    IGetFeaturedProjectsUseCase, IGetPublicProjectUseCase,
};
use crate::modules::portfolio::application::use_cases::get_stats::IGetStatsUseCase;
use crate::modules::portfolio::application::use_cases::list_categories::IListCategoriesUseCase;
use crate::modules::portfolio::application::use_cases::list_projects::{
    IListProjectsUseCase, IListPublicProjectsUseCase,
};
use crate::modules::portfolio::application::use_cases::list_technologies::{
    IListTechnologiesUseCase, ITopSkillsUseCase,
};
use crate::modules::portfolio::application::use_cases::save_category::{
    ICreateCategoryUseCase, IDeleteCategoryUseCase, IUpdateCategoryUseCase,
};
use crate::modules::portfolio::application::use_cases::save_project::{
    ICreateProjectUseCase, IDeleteProjectUseCase, IUpdateProjectUseCase,
};
use crate::modules::portfolio::application::use_cases::save_technology::{
    ICreateTechnologyUseCase, IDeleteTechnologyUseCase, IUpdateTechnologyUseCase,
};

/// Wired set of portfolio-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct PortfolioUseCases {
    pub list_categories: Arc<dyn IListCategoriesUseCase>,
    pub create_category: Arc<dyn ICreateCategoryUseCase>,
    pub update_category: Arc<dyn IUpdateCategoryUseCase>,
    pub delete_category: Arc<dyn IDeleteCategoryUseCase>,
    pub list_technologies: Arc<dyn IListTechnologiesUseCase>,
    pub top_skills: Arc<dyn ITopSkillsUseCase>,
    pub create_technology: Arc<dyn ICreateTechnologyUseCase>,
    pub update_technology: Arc<dyn IUpdateTechnologyUseCase>,
    pub delete_technology: Arc<dyn IDeleteTechnologyUseCase>,
    pub list_projects: Arc<dyn IListProjectsUseCase>,
    pub list_public_projects: Arc<dyn IListPublicProjectsUseCase>,
    pub get_public_project: Arc<dyn IGetPublicProjectUseCase>,
    pub get_featured_projects: Arc<dyn IGetFeaturedProjectsUseCase>,
    pub create_project: Arc<dyn ICreateProjectUseCase>,
    pub update_project: Arc<dyn IUpdateProjectUseCase>,
    pub delete_project: Arc<dyn IDeleteProjectUseCase>,
    pub get_stats: Arc<dyn IGetStatsUseCase>,
}
