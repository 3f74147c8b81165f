pub mod domain;
pub mod ports;
pub mod services;
pub mod use_cases;

mod accounts_use_cases;
pub use accounts_use_cases::AccountsUseCases;
