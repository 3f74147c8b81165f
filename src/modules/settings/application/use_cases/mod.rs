pub mod delete_navigation;
pub mod get_settings;
pub mod list_navigation;
pub mod list_palettes;
pub mod save_navigation;
pub mod save_palette;
pub mod set_default_palette;
pub mod update_settings;
