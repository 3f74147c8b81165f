pub mod posts_admin;
pub mod posts_public;

pub use posts_admin::{
    create_post_handler, delete_post_handler, get_admin_posts_handler, update_post_handler,
};
pub use posts_public::{
    get_public_post_handler, get_public_posts_handler, get_recent_posts_handler,
};
