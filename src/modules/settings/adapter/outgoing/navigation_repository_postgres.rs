use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::settings::adapter::outgoing::sea_orm_entity::navigation_items::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::settings::application::domain::entities::NavigationItem;
use crate::modules::settings::application::ports::outgoing::{
    CreateNavigationData, NavigationRepository, NavigationRepositoryError, UpdateNavigationData,
};

#[derive(Clone)]
pub struct NavigationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NavigationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> NavigationRepositoryError {
    NavigationRepositoryError::DatabaseError(e.to_string())
}

fn model_to_item(model: Model) -> NavigationItem {
    NavigationItem {
        id: model.id,
        title: model.title,
        url: model.url,
        icon: model.icon,
        order: model.menu_order,
        is_active: model.is_active,
        is_external: model.is_external,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl NavigationRepository for NavigationRepositoryPostgres {
    async fn list(
        &self,
        only_active: bool,
    ) -> Result<Vec<NavigationItem>, NavigationRepositoryError> {
        let mut query = Entity::find()
            .order_by_asc(Column::MenuOrder)
            .order_by_asc(Column::Title);

        if only_active {
            query = query.filter(Column::IsActive.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_item).collect())
    }

    async fn create(
        &self,
        data: CreateNavigationData,
    ) -> Result<NavigationItem, NavigationRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            url: Set(data.url),
            icon: Set(data.icon),
            menu_order: Set(data.order),
            is_active: Set(data.is_active),
            is_external: Set(data.is_external),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_item(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateNavigationData,
    ) -> Result<NavigationItem, NavigationRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(NavigationRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        if let Some(v) = data.title {
            model.title = Set(v);
        }
        if let Some(v) = data.url {
            model.url = Set(v);
        }
        if let Some(v) = data.icon {
            model.icon = Set(v);
        }
        if let Some(v) = data.order {
            model.menu_order = Set(v);
        }
        if let Some(v) = data.is_active {
            model.is_active = Set(v);
        }
        if let Some(v) = data.is_external {
            model.is_external = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_item(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), NavigationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(NavigationRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_active(&self, id: Uuid) -> Result<bool, NavigationRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(NavigationRepositoryError::NotFound)?;

        let next = !existing.is_active;
        let mut model: ActiveModel = existing.into();
        model.is_active = Set(next);
        model.updated_at = Set(Utc::now().fixed_offset());
        model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(next)
    }
}
