pub mod domain;
pub mod ports;
pub mod use_cases;

mod portfolio_use_cases;
pub use portfolio_use_cases::PortfolioUseCases;
