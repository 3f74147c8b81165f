pub mod domain;
pub mod ports;
pub mod use_cases;

mod journey_use_cases;
pub use journey_use_cases::JourneyUseCases;
