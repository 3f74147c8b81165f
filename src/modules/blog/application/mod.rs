pub mod domain;
pub mod ports;
pub mod use_cases;

mod blog_use_cases;
pub use blog_use_cases::BlogUseCases;
