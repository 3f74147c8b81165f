use std::sync::Arc;

use crate::modules::resume::application::use_cases::generate_cv::IGenerateCvUseCase;

/// Wired set of resume-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct ResumeUseCases {
    pub generate_cv: Arc<dyn IGenerateCvUseCase>,
}
