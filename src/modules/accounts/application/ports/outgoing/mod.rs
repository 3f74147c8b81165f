pub mod credentials_repository;
pub mod profile_repository;
pub mod tracking_repository;
