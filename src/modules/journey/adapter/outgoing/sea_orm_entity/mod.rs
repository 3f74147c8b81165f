pub mod faq_items;
pub mod journey_entries;
