pub mod services;

pub use services::{
    create_service_handler, delete_service_handler, get_admin_services_handler,
    get_featured_services_handler, get_services_handler, update_service_handler,
};
