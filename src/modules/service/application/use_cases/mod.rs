pub mod list_services;
pub mod save_service;
