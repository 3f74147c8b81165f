use crate::modules::settings::application::domain::entities::SiteSettings;
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError, UpdateSettingsData,
};
use async_trait::async_trait;
use email_address::EmailAddress;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub enum UpdateSettingsError {
    InvalidEmail(String),
    InvalidSkillLevel { name: String, level: u8 },
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateSettingsUseCase: Send + Sync {
    async fn execute(&self, data: UpdateSettingsData)
        -> Result<SiteSettings, UpdateSettingsError>;
}

pub struct UpdateSettingsUseCase<R: SettingsRepository> {
    repository: R,
}

impl<R: SettingsRepository> UpdateSettingsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SettingsRepository> IUpdateSettingsUseCase for UpdateSettingsUseCase<R> {
    async fn execute(
        &self,
        data: UpdateSettingsData,
    ) -> Result<SiteSettings, UpdateSettingsError> {
        if let Some(email) = data.email.as_deref() {
            if !email.is_empty() && EmailAddress::from_str(email).is_err() {
                return Err(UpdateSettingsError::InvalidEmail(email.to_string()));
            }
        }

        if let Some(skills) = &data.skills_expertise {
            if let Some(bad) = skills.iter().find(|s| s.level > 100) {
                return Err(UpdateSettingsError::InvalidSkillLevel {
                    name: bad.name.clone(),
                    level: bad.level,
                });
            }
        }

        self.repository.update(data).await.map_err(|e| match e {
            SettingsRepositoryError::DatabaseError(msg) => {
                UpdateSettingsError::RepositoryError(msg)
            }
        })
    }
}
