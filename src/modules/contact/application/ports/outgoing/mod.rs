mod contact_notifier;
mod contact_repository;

pub use contact_notifier::{ContactNotifier, NullContactNotifier};
pub use contact_repository::{
    ContactRepository, ContactRepositoryError, CreateMessageData,
};
