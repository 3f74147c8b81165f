use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use crate::modules::contact::application::domain::entities::{ContactMessage, MessageStatus};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, CreateMessageData,
};
use crate::modules::service::adapter::outgoing::sea_orm_entity::service_offerings;

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

fn model_to_message(model: contact_messages::Model) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        company: model.company,
        subject: model.subject,
        message: model.message,
        service_interest_id: model.service_interest_id,
        // Rows only ever hold wire names written by this adapter.
        status: MessageStatus::parse(&model.status).unwrap_or(MessageStatus::New),
        ip_address: model.ip_address,
        user_agent: model.user_agent,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn list(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let mut query = contact_messages::Entity::find()
            .order_by_desc(contact_messages::Column::CreatedAt);

        if let Some(status) = status {
            query = query.filter(contact_messages::Column::Status.eq(status.as_str()));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_message).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessage>, ContactRepositoryError> {
        let model = contact_messages::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_message))
    }

    async fn create(
        &self,
        data: CreateMessageData,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        if let Some(service_id) = data.service_interest_id {
            let exists = service_offerings::Entity::find_by_id(service_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?;
            if exists.is_none() {
                return Err(ContactRepositoryError::MissingReference(format!(
                    "service {service_id}"
                )));
            }
        }

        let now = Utc::now().fixed_offset();
        let model = contact_messages::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            company: Set(data.company),
            subject: Set(data.subject),
            message: Set(data.message),
            service_interest_id: Set(data.service_interest_id),
            status: Set(MessageStatus::New.as_str().to_string()),
            ip_address: Set(data.ip_address),
            user_agent: Set(data.user_agent),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_message(inserted))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let existing = contact_messages::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactRepositoryError::NotFound)?;

        let mut model: contact_messages::ActiveModel = existing.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_message(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = contact_messages::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}
