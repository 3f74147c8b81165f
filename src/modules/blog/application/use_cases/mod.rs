pub mod get_public_post;
pub mod list_posts;
pub mod save_post;
