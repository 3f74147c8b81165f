mod navigation_repository;
mod palette_repository;
mod settings_repository;

pub use navigation_repository::{
    CreateNavigationData, NavigationRepository, NavigationRepositoryError, UpdateNavigationData,
};
pub use palette_repository::{
    CreatePaletteData, PaletteRepository, PaletteRepositoryError, UpdatePaletteData,
};
pub use settings_repository::{SettingsRepository, SettingsRepositoryError, UpdateSettingsData};
