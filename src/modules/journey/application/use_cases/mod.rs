pub mod delete_journey;
pub mod list_faqs;
pub mod list_journey;
pub mod save_faq;
pub mod save_journey;
