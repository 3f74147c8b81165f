mod service_repository;

pub use service_repository::{
    CreateServiceData, ServiceRepository, ServiceRepositoryError, UpdateServiceData,
};
