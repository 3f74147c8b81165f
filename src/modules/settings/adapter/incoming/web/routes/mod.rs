pub mod navigation;
pub mod palettes;
pub mod site_settings;

pub use navigation::{
    create_navigation_handler, delete_navigation_handler, get_admin_navigation_handler,
    get_navigation_handler, toggle_navigation_handler, update_navigation_handler,
};
pub use palettes::{
    create_palette_handler, delete_palette_handler, get_palettes_handler,
    set_default_palette_handler, update_palette_handler,
};
pub use site_settings::{get_site_settings_handler, update_site_settings_handler};
