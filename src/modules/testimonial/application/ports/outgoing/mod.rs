mod testimonial_repository;

pub use testimonial_repository::{
    CreateTestimonialData, TestimonialRepository, TestimonialRepositoryError,
    UpdateTestimonialData,
};
