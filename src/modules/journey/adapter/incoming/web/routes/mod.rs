pub mod faqs;
pub mod journey;

pub use faqs::{
    create_faq_handler, delete_faq_handler, get_admin_faqs_handler, get_faqs_handler,
    update_faq_handler,
};
pub use journey::{
    create_journey_handler, delete_journey_handler, get_admin_journey_handler,
    get_journey_handler, update_journey_handler,
};
