use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::modules::testimonial::application::ports::outgoing::{
    CreateTestimonialData, TestimonialRepository, TestimonialRepositoryError,
    UpdateTestimonialData,
};
use async_trait::async_trait;
use email_address::EmailAddress;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveTestimonialError {
    EmptyClientName,
    EmptyContent,
    InvalidRating,
    InvalidEmail,
    MissingReference(String),
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateTestimonialData,
    ) -> Result<Testimonial, SaveTestimonialError>;
}

#[async_trait]
pub trait IUpdateTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateTestimonialData,
    ) -> Result<Testimonial, SaveTestimonialError>;
}

#[async_trait]
pub trait IDeleteTestimonialUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SaveTestimonialError>;
}

pub struct SaveTestimonialUseCase<R: TestimonialRepository> {
    repository: R,
}

impl<R: TestimonialRepository> SaveTestimonialUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: TestimonialRepositoryError) -> SaveTestimonialError {
    match e {
        TestimonialRepositoryError::NotFound => SaveTestimonialError::NotFound,
        TestimonialRepositoryError::MissingReference(what) => {
            SaveTestimonialError::MissingReference(what)
        }
        TestimonialRepositoryError::DatabaseError(msg) => {
            SaveTestimonialError::RepositoryError(msg)
        }
    }
}

fn check_rating(rating: i16) -> Result<(), SaveTestimonialError> {
    if !(1..=5).contains(&rating) {
        return Err(SaveTestimonialError::InvalidRating);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), SaveTestimonialError> {
    if email.is_empty() {
        return Ok(());
    }
    EmailAddress::from_str(email)
        .map(|_| ())
        .map_err(|_| SaveTestimonialError::InvalidEmail)
}

#[async_trait]
impl<R: TestimonialRepository> ICreateTestimonialUseCase for SaveTestimonialUseCase<R> {
    async fn execute(
        &self,
        mut data: CreateTestimonialData,
    ) -> Result<Testimonial, SaveTestimonialError> {
        data.client_name = data.client_name.trim().to_string();
        if data.client_name.is_empty() {
            return Err(SaveTestimonialError::EmptyClientName);
        }
        if data.content.trim().is_empty() {
            return Err(SaveTestimonialError::EmptyContent);
        }
        check_rating(data.rating)?;
        check_email(&data.client_email)?;

        self.repository.create(data).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: TestimonialRepository> IUpdateTestimonialUseCase for SaveTestimonialUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateTestimonialData,
    ) -> Result<Testimonial, SaveTestimonialError> {
        if matches!(data.client_name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(SaveTestimonialError::EmptyClientName);
        }
        if matches!(data.content.as_deref(), Some(c) if c.trim().is_empty()) {
            return Err(SaveTestimonialError::EmptyContent);
        }
        if let Some(rating) = data.rating {
            check_rating(rating)?;
        }
        if let Some(email) = data.client_email.as_deref() {
            check_email(email)?;
        }

        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: TestimonialRepository> IDeleteTestimonialUseCase for SaveTestimonialUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SaveTestimonialError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
