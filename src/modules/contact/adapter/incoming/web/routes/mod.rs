pub mod contact;

pub use contact::{
    delete_message_handler, get_message_handler, get_messages_handler, submit_contact_handler,
    update_message_status_handler,
};
