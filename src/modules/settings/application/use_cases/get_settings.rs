use crate::modules::settings::application::domain::entities::SiteSettings;
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum GetSettingsError {
    RepositoryError(String),
}

/// Reads the site configuration singleton, creating it on first access.
#[async_trait]
pub trait IGetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError>;
}

pub struct GetSettingsUseCase<R: SettingsRepository> {
    repository: R,
}

impl<R: SettingsRepository> GetSettingsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SettingsRepository> IGetSettingsUseCase for GetSettingsUseCase<R> {
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError> {
        self.repository.get_or_create().await.map_err(|e| match e {
            SettingsRepositoryError::DatabaseError(msg) => GetSettingsError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::application::ports::outgoing::UpdateSettingsData;

    struct MockSettingsRepository {
        fail: bool,
    }

    #[async_trait]
    impl SettingsRepository for MockSettingsRepository {
        async fn get_or_create(&self) -> Result<SiteSettings, SettingsRepositoryError> {
            if self.fail {
                Err(SettingsRepositoryError::DatabaseError("db down".into()))
            } else {
                Ok(SiteSettings::default())
            }
        }

        async fn update(
            &self,
            _data: UpdateSettingsData,
        ) -> Result<SiteSettings, SettingsRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn returns_singleton_settings() {
        let use_case = GetSettingsUseCase::new(MockSettingsRepository { fail: false });
        let settings = use_case.execute().await.unwrap();
        assert_eq!(settings.site_name, "Portfolio");
    }

    #[tokio::test]
    async fn maps_database_error() {
        let use_case = GetSettingsUseCase::new(MockSettingsRepository { fail: true });
        match use_case.execute().await {
            Err(GetSettingsError::RepositoryError(msg)) => assert_eq!(msg, "db down"),
            other => panic!("expected RepositoryError, got {other:?}"),
        }
    }
}
