use crate::modules::accounts::application::domain::entities::{ActivityAction, UserSession};
use crate::modules::accounts::application::ports::outgoing::credentials_repository::CredentialsRepository;
use crate::modules::accounts::application::ports::outgoing::tracking_repository::{
    CreateSessionData, LoginAttemptData, RecordActivityData, TrackingRepository,
};
use crate::modules::accounts::application::services::password_hasher::PasswordHasher;
use crate::modules::accounts::application::services::session_key::generate_session_key;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    InvalidCredentials,
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<UserSession, LoginError>;
}

pub struct LoginUserUseCase<C: CredentialsRepository, T: TrackingRepository> {
    credentials: C,
    tracking: T,
    hasher: Arc<dyn PasswordHasher>,
}

impl<C: CredentialsRepository, T: TrackingRepository> LoginUserUseCase<C, T> {
    pub fn new(credentials: C, tracking: T, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            credentials,
            tracking,
            hasher,
        }
    }

    async fn record_attempt(&self, input: &LoginInput, success: bool) {
        let result = self
            .tracking
            .record_login_attempt(LoginAttemptData {
                username: input.username.clone(),
                ip_address: input.ip_address.clone(),
                user_agent: input.user_agent.clone(),
                success,
            })
            .await;
        if let Err(e) = result {
            tracing::warn!("failed to record login attempt: {}", e);
        }
    }
}

#[async_trait]
impl<C: CredentialsRepository, T: TrackingRepository> ILoginUserUseCase
    for LoginUserUseCase<C, T>
{
    async fn execute(&self, input: LoginInput) -> Result<UserSession, LoginError> {
        let username = input.username.trim().to_lowercase();
        let record = self
            .credentials
            .find_by_username(&username)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let record = match record {
            Some(record) => record,
            None => {
                self.record_attempt(&input, false).await;
                return Err(LoginError::InvalidCredentials);
            }
        };

        let verified = self
            .hasher
            .verify_password(&input.password, &record.password_hash)
            .map_err(LoginError::RepositoryError)?;
        if !verified {
            self.record_attempt(&input, false).await;
            return Err(LoginError::InvalidCredentials);
        }

        self.record_attempt(&input, true).await;

        let session = self
            .tracking
            .create_session(CreateSessionData {
                user_id: record.user_id,
                session_key: generate_session_key(),
                ip_address: input.ip_address.clone(),
                user_agent: input.user_agent.clone(),
            })
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        // Activity is best effort, the login itself already succeeded.
        let result = self
            .tracking
            .record_activity(RecordActivityData {
                user_id: Some(record.user_id),
                action: ActivityAction::Login,
                description: Some(format!("User {} logged in", record.username)),
                metadata: serde_json::json!({}),
                ip_address: input.ip_address,
                user_agent: input.user_agent,
                referer: None,
            })
            .await;
        if let Err(e) = result {
            tracing::warn!("failed to record login activity: {}", e);
        }

        Ok(session)
    }
}
