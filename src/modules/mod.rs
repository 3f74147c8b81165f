pub mod accounts;
pub mod blog;
pub mod contact;
pub mod email;
pub mod journey;
pub mod portfolio;
pub mod resume;
pub mod service;
pub mod settings;
pub mod testimonial;
