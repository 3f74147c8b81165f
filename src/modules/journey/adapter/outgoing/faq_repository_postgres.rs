use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::journey::adapter::outgoing::sea_orm_entity::faq_items::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::journey::application::domain::entities::FaqItem;
use crate::modules::journey::application::ports::outgoing::{
    CreateFaqData, FaqRepository, FaqRepositoryError, UpdateFaqData,
};

#[derive(Clone)]
pub struct FaqRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FaqRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> FaqRepositoryError {
    FaqRepositoryError::DatabaseError(e.to_string())
}

fn model_to_item(model: Model) -> FaqItem {
    FaqItem {
        id: model.id,
        question: model.question,
        answer: model.answer,
        order: model.display_order,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl FaqRepository for FaqRepositoryPostgres {
    async fn list(&self, only_active: bool) -> Result<Vec<FaqItem>, FaqRepositoryError> {
        let mut query = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Question);

        if only_active {
            query = query.filter(Column::IsActive.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_item).collect())
    }

    async fn create(&self, data: CreateFaqData) -> Result<FaqItem, FaqRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            question: Set(data.question),
            answer: Set(data.answer),
            display_order: Set(data.order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_item(inserted))
    }

    async fn update(&self, id: Uuid, data: UpdateFaqData) -> Result<FaqItem, FaqRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(FaqRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        if let Some(v) = data.question {
            model.question = Set(v);
        }
        if let Some(v) = data.answer {
            model.answer = Set(v);
        }
        if let Some(v) = data.order {
            model.display_order = Set(v);
        }
        if let Some(v) = data.is_active {
            model.is_active = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_item(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), FaqRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(FaqRepositoryError::NotFound);
        }
        Ok(())
    }
}
