pub mod admin;
pub mod auth;

pub use admin::{
    get_profile_handler, get_recent_activity_handler, get_sessions_handler,
    update_profile_handler,
};
pub use auth::{login_handler, logout_handler};
