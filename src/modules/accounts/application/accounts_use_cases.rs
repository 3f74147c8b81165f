use std::sync::Arc;

use crate::modules::accounts::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::accounts::application::use_cases::logout_user::ILogoutUserUseCase;
use crate::modules::accounts::application::use_cases::manage_profile::{
    IGetProfileUseCase, IUpdateProfileUseCase,
};
use crate::modules::accounts::application::use_cases::track_activity::{
    IListSessionsUseCase, IRecentActivityUseCase, IRecordActivityUseCase, ITouchSessionUseCase,
};

/// Wired set of accounts-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct AccountsUseCases {
    pub login: Arc<dyn ILoginUserUseCase>,
    pub logout: Arc<dyn ILogoutUserUseCase>,
    pub get_profile: Arc<dyn IGetProfileUseCase>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase>,
    pub record_activity: Arc<dyn IRecordActivityUseCase>,
    pub recent_activity: Arc<dyn IRecentActivityUseCase>,
    pub list_sessions: Arc<dyn IListSessionsUseCase>,
    pub touch_session: Arc<dyn ITouchSessionUseCase>,
}
