use std::sync::Arc;

use crate::modules::service::application::use_cases::list_services::{
    IFeaturedServicesUseCase, IListServicesUseCase,
};
use crate::modules::service::application::use_cases::save_service::{
    ICreateServiceUseCase, IDeleteServiceUseCase, IUpdateServiceUseCase,
};

/// Wired set of service-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct ServiceUseCases {
    pub list_services: Arc<dyn IListServicesUseCase>,
    pub featured_services: Arc<dyn IFeaturedServicesUseCase>,
    pub create_service: Arc<dyn ICreateServiceUseCase>,
    pub update_service: Arc<dyn IUpdateServiceUseCase>,
    pub delete_service: Arc<dyn IDeleteServiceUseCase>,
}
