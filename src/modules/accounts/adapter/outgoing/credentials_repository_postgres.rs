use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::accounts::adapter::outgoing::sea_orm_entity::users;
use crate::modules::accounts::application::ports::outgoing::credentials_repository::{
    CredentialRecord, CredentialsRepository, CredentialsRepositoryError,
};

#[derive(Clone)]
pub struct CredentialsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CredentialsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialsRepository for CredentialsRepositoryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, CredentialsRepositoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .filter(users::Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| CredentialsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| CredentialRecord {
            user_id: m.id,
            username: m.username,
            password_hash: m.password_hash,
        }))
    }
}
