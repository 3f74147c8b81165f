use std::sync::Arc;

use crate::modules::contact::application::use_cases::manage_messages::{
    IDeleteMessageUseCase, IGetMessageUseCase, IListMessagesUseCase, IUpdateMessageStatusUseCase,
};
use crate::modules::contact::application::use_cases::submit_message::ISubmitMessageUseCase;

/// Wired set of contact-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct ContactUseCases {
    pub submit_message: Arc<dyn ISubmitMessageUseCase>,
    pub list_messages: Arc<dyn IListMessagesUseCase>,
    pub get_message: Arc<dyn IGetMessageUseCase>,
    pub update_message_status: Arc<dyn IUpdateMessageStatusUseCase>,
    pub delete_message: Arc<dyn IDeleteMessageUseCase>,
}
