use std::sync::Arc;

use crate::modules::settings::application::use_cases::delete_navigation::{
    IDeleteNavigationUseCase, IToggleNavigationUseCase,
};
use crate::modules::settings::application::use_cases::get_settings::IGetSettingsUseCase;
use crate::modules::settings::application::use_cases::list_navigation::IListNavigationUseCase;
use crate::modules::settings::application::use_cases::list_palettes::IListPalettesUseCase;
use crate::modules::settings::application::use_cases::save_navigation::{
    ICreateNavigationUseCase, IUpdateNavigationUseCase,
};
use crate::modules::settings::application::use_cases::save_palette::{
    ICreatePaletteUseCase, IUpdatePaletteUseCase,
};
use crate::modules::settings::application::use_cases::set_default_palette::{
    IDeletePaletteUseCase, ISetDefaultPaletteUseCase,
};
use crate::modules::settings::application::use_cases::update_settings::IUpdateSettingsUseCase;

/// Wired set of settings-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct SettingsUseCases {
    pub get_settings: Arc<dyn IGetSettingsUseCase>,
    pub update_settings: Arc<dyn IUpdateSettingsUseCase>,
    pub list_navigation: Arc<dyn IListNavigationUseCase>,
    pub create_navigation: Arc<dyn ICreateNavigationUseCase>,
    pub update_navigation: Arc<dyn IUpdateNavigationUseCase>,
    pub delete_navigation: Arc<dyn IDeleteNavigationUseCase>,
    pub toggle_navigation: Arc<dyn IToggleNavigationUseCase>,
    pub list_palettes: Arc<dyn IListPalettesUseCase>,
    pub create_palette: Arc<dyn ICreatePaletteUseCase>,
    pub update_palette: Arc<dyn IUpdatePaletteUseCase>,
    pub delete_palette: Arc<dyn IDeletePaletteUseCase>,
    pub set_default_palette: Arc<dyn ISetDefaultPaletteUseCase>,
}
