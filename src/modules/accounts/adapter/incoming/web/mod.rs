pub mod activity;
pub mod routes;
