mod faq_repository;
mod journey_repository;

pub use faq_repository::{CreateFaqData, FaqRepository, FaqRepositoryError, UpdateFaqData};
pub use journey_repository::{
    CreateJourneyData, JourneyFilter, JourneyRepository, JourneyRepositoryError, UpdateJourneyData,
};
