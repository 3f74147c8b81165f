use std::sync::Arc;

use crate::modules::journey::application::use_cases::delete_journey::IDeleteJourneyUseCase;
use crate::modules::journey::application::use_cases::list_faqs::IListFaqsUseCase;
use crate::modules::journey::application::use_cases::list_journey::IListJourneyUseCase;
use crate::modules::journey::application::use_cases::save_faq::{
    ICreateFaqUseCase, IDeleteFaqUseCase, IUpdateFaqUseCase,
};
use crate::modules::journey::application::use_cases::save_journey::{
    ICreateJourneyUseCase, IUpdateJourneyUseCase,
};

/// Wired set of journey-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct JourneyUseCases {
    pub list_journey: Arc<dyn IListJourneyUseCase>,
    pub create_journey: Arc<dyn ICreateJourneyUseCase>,
    pub update_journey: Arc<dyn IUpdateJourneyUseCase>,
    pub delete_journey: Arc<dyn IDeleteJourneyUseCase>,
    pub list_faqs: Arc<dyn IListFaqsUseCase>,
    pub create_faq: Arc<dyn ICreateFaqUseCase>,
    pub update_faq: Arc<dyn IUpdateFaqUseCase>,
    pub delete_faq: Arc<dyn IDeleteFaqUseCase>,
}
