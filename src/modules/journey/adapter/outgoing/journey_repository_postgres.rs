use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::journey::adapter::outgoing::sea_orm_entity::journey_entries::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::journey::application::domain::entities::{EntryType, JourneyEntry};
use crate::modules::journey::application::ports::outgoing::{
    CreateJourneyData, JourneyFilter, JourneyRepository, JourneyRepositoryError, UpdateJourneyData,
};

#[derive(Clone)]
pub struct JourneyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JourneyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> JourneyRepositoryError {
    JourneyRepositoryError::DatabaseError(e.to_string())
}

fn string_list(value: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

fn model_to_entry(model: Model) -> JourneyEntry {
    JourneyEntry {
        id: model.id,
        // Rows only ever hold wire names written by this adapter.
        entry_type: EntryType::parse(&model.entry_type).unwrap_or(EntryType::Work),
        title: model.title,
        organization: model.organization,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        is_current: model.is_current,
        description: model.description,
        achievements: string_list(&model.achievements),
        technologies: string_list(&model.technologies),
        is_active: model.is_active,
        order: model.display_order,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl JourneyRepository for JourneyRepositoryPostgres {
    async fn list(
        &self,
        filter: JourneyFilter,
    ) -> Result<Vec<JourneyEntry>, JourneyRepositoryError> {
        let mut query = Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::DisplayOrder);

        if let Some(entry_type) = filter.entry_type {
            query = query.filter(Column::EntryType.eq(entry_type.as_str()));
        }
        if filter.only_active {
            query = query.filter(Column::IsActive.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_entry).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JourneyEntry>, JourneyRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_entry))
    }

    async fn create(
        &self,
        data: CreateJourneyData,
    ) -> Result<JourneyEntry, JourneyRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            entry_type: Set(data.entry_type.as_str().to_string()),
            title: Set(data.title),
            organization: Set(data.organization),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            description: Set(data.description),
            achievements: Set(serde_json::json!(data.achievements)),
            technologies: Set(serde_json::json!(data.technologies)),
            is_active: Set(data.is_active),
            display_order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_entry(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateJourneyData,
    ) -> Result<JourneyEntry, JourneyRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(JourneyRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        if let Some(v) = data.entry_type {
            model.entry_type = Set(v.as_str().to_string());
        }
        if let Some(v) = data.title {
            model.title = Set(v);
        }
        if let Some(v) = data.organization {
            model.organization = Set(v);
        }
        if let Some(v) = data.location {
            model.location = Set(v);
        }
        if let Some(v) = data.start_date {
            model.start_date = Set(v);
        }
        if let Some(v) = data.end_date {
            model.end_date = Set(v);
        }
        if let Some(v) = data.is_current {
            model.is_current = Set(v);
        }
        if let Some(v) = data.description {
            model.description = Set(v);
        }
        if let Some(v) = data.achievements {
            model.achievements = Set(serde_json::json!(v));
        }
        if let Some(v) = data.technologies {
            model.technologies = Set(serde_json::json!(v));
        }
        if let Some(v) = data.is_active {
            model.is_active = Set(v);
        }
        if let Some(v) = data.order {
            model.display_order = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_entry(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), JourneyRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JourneyRepositoryError::NotFound);
        }
        Ok(())
    }
}
