use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::service::adapter::outgoing::sea_orm_entity::service_offerings;
use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::outgoing::{
    CreateServiceData, ServiceRepository, ServiceRepositoryError, UpdateServiceData,
};

#[derive(Clone)]
pub struct ServiceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ServiceRepositoryError {
    ServiceRepositoryError::DatabaseError(e.to_string())
}

fn map_slug_err(e: DbErr) -> ServiceRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        return ServiceRepositoryError::SlugTaken;
    }
    ServiceRepositoryError::DatabaseError(msg)
}

fn string_list(value: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

fn model_to_service(model: service_offerings::Model) -> ServiceOffering {
    ServiceOffering {
        id: model.id,
        name: model.name,
        slug: model.slug,
        description: model.description,
        short_description: model.short_description,
        icon: model.icon,
        delivery_time: model.delivery_time,
        features: string_list(&model.features),
        process_steps: string_list(&model.process_steps),
        starting_price: model.starting_price,
        price_unit: model.price_unit,
        is_active: model.is_active,
        is_featured: model.is_featured,
        order: model.order,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryPostgres {
    async fn list(
        &self,
        only_active: bool,
    ) -> Result<Vec<ServiceOffering>, ServiceRepositoryError> {
        let mut query = service_offerings::Entity::find()
            .order_by_asc(service_offerings::Column::Order)
            .order_by_asc(service_offerings::Column::Name);

        if only_active {
            query = query.filter(service_offerings::Column::IsActive.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_service).collect())
    }

    async fn featured(&self) -> Result<Vec<ServiceOffering>, ServiceRepositoryError> {
        let models = service_offerings::Entity::find()
            .filter(service_offerings::Column::IsActive.eq(true))
            .filter(service_offerings::Column::IsFeatured.eq(true))
            .order_by_asc(service_offerings::Column::Order)
            .order_by_asc(service_offerings::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_service).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ServiceOffering>, ServiceRepositoryError> {
        let model = service_offerings::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_service))
    }

    async fn create(
        &self,
        data: CreateServiceData,
    ) -> Result<ServiceOffering, ServiceRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = service_offerings::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            short_description: Set(data.short_description),
            icon: Set(data.icon),
            delivery_time: Set(data.delivery_time),
            features: Set(serde_json::json!(data.features)),
            process_steps: Set(serde_json::json!(data.process_steps)),
            starting_price: Set(data.starting_price),
            price_unit: Set(data.price_unit),
            is_active: Set(data.is_active),
            is_featured: Set(data.is_featured),
            order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_slug_err)?;
        Ok(model_to_service(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateServiceData,
    ) -> Result<ServiceOffering, ServiceRepositoryError> {
        let existing = service_offerings::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ServiceRepositoryError::NotFound)?;

        let mut model: service_offerings::ActiveModel = existing.into();
        if let Some(v) = data.name {
            model.name = Set(v);
        }
        if let Some(v) = data.slug {
            model.slug = Set(v);
        }
        if let Some(v) = data.description {
            model.description = Set(v);
        }
        if let Some(v) = data.short_description {
            model.short_description = Set(v);
        }
        if let Some(v) = data.icon {
            model.icon = Set(v);
        }
        if let Some(v) = data.delivery_time {
            model.delivery_time = Set(v);
        }
        if let Some(v) = data.features {
            model.features = Set(serde_json::json!(v));
        }
        if let Some(v) = data.process_steps {
            model.process_steps = Set(serde_json::json!(v));
        }
        if let Some(v) = data.starting_price {
            model.starting_price = Set(v);
        }
        if let Some(v) = data.price_unit {
            model.price_unit = Set(v);
        }
        if let Some(v) = data.is_active {
            model.is_active = Set(v);
        }
        if let Some(v) = data.is_featured {
            model.is_featured = Set(v);
        }
        if let Some(v) = data.order {
            model.order = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_slug_err)?;
        Ok(model_to_service(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceRepositoryError> {
        let result = service_offerings::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ServiceRepositoryError::NotFound);
        }
        Ok(())
    }
}
