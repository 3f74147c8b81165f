pub mod cv_notifier;
pub mod pdf_engine;
