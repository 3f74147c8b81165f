pub mod domain;
pub mod ports;
pub mod use_cases;

mod service_use_cases;
pub use service_use_cases::ServiceUseCases;
