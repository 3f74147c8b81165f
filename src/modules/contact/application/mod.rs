pub mod domain;
pub mod ports;
pub mod use_cases;

mod contact_use_cases;
pub use contact_use_cases::ContactUseCases;
