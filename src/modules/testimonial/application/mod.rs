pub mod domain;
pub mod ports;
pub mod use_cases;

mod testimonial_use_cases;
pub use testimonial_use_cases::TestimonialUseCases;
