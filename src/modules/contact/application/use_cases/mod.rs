pub mod manage_messages;
pub mod submit_message;
