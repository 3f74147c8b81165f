use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialRepository, TestimonialRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListTestimonialsError {
    RepositoryError(String),
}

/// `only_approved` is true on the public surface.
#[async_trait]
pub trait IListTestimonialsUseCase: Send + Sync {
    async fn execute(&self, only_approved: bool)
        -> Result<Vec<Testimonial>, ListTestimonialsError>;
}

pub struct ListTestimonialsUseCase<R: TestimonialRepository> {
    repository: R,
}

impl<R: TestimonialRepository> ListTestimonialsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TestimonialRepository> IListTestimonialsUseCase for ListTestimonialsUseCase<R> {
    async fn execute(
        &self,
        only_approved: bool,
    ) -> Result<Vec<Testimonial>, ListTestimonialsError> {
        self.repository
            .list(only_approved)
            .await
            .map_err(|e: TestimonialRepositoryError| {
                ListTestimonialsError::RepositoryError(e.to_string())
            })
    }
}
