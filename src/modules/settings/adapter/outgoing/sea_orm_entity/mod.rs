pub mod color_palettes;
pub mod navigation_items;
pub mod site_settings;
