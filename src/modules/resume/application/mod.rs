pub mod domain;
pub mod ports;
pub mod services;
pub mod use_cases;

mod resume_use_cases;
pub use resume_use_cases::ResumeUseCases;
