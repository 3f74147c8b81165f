pub mod login_user;
pub mod logout_user;
pub mod manage_profile;
pub mod track_activity;
