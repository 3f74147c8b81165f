pub mod login_attempts;
pub mod user_activities;
pub mod user_profiles;
pub mod user_sessions;
pub mod users;
