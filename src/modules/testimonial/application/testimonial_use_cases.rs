use std::sync::Arc;

use crate::modules::testimonial::application::use_cases::list_testimonials::IListTestimonialsUseCase;
use crate::modules::testimonial::application::use_cases::save_testimonial::{
    ICreateTestimonialUseCase, IDeleteTestimonialUseCase, IUpdateTestimonialUseCase,
};

/// Wired set of testimonial-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct TestimonialUseCases {
    pub list_testimonials: Arc<dyn IListTestimonialsUseCase>,
    pub create_testimonial: Arc<dyn ICreateTestimonialUseCase>,
    pub update_testimonial: Arc<dyn IUpdateTestimonialUseCase>,
    pub delete_testimonial: Arc<dyn IDeleteTestimonialUseCase>,
}
