use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialsRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Stored login credentials; the hash never leaves the accounts module.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub user_id: Uuid,
    pub username: String,
    pub password_hash: String,
}

#[async_trait]
pub trait CredentialsRepository: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, CredentialsRepositoryError>;
}
