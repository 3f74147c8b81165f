pub mod smtp_sender;
