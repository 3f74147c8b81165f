use crate::modules::testimonial::application::domain::entities::Testimonial;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialRepositoryError {
    #[error("testimonial not found")]
    NotFound,
    #[error("referenced record not found: {0}")]
    MissingReference(String),
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateTestimonialData {
    pub client_name: String,
    pub client_position: String,
    pub client_company: String,
    pub client_email: String,
    pub client_photo: String,
    pub content: String,
    pub rating: i16,
    pub project_id: Option<Uuid>,
    pub is_featured: bool,
    pub is_approved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTestimonialData {
    pub client_name: Option<String>,
    pub client_position: Option<String>,
    pub client_company: Option<String>,
    pub client_email: Option<String>,
    pub client_photo: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
    pub project_id: Option<Option<Uuid>>,
    pub is_featured: Option<bool>,
    pub is_approved: Option<bool>,
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Featured first, then newest. `only_approved` drives the public
    /// surface.
    async fn list(
        &self,
        only_approved: bool,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Testimonial>, TestimonialRepositoryError>;

    async fn create(
        &self,
        data: CreateTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError>;
}
