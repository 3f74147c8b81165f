use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::categories::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::portfolio::application::domain::entities::Category;
use crate::modules::portfolio::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData, UpdateCategoryData,
};

#[derive(Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        return CategoryRepositoryError::NameTaken;
    }
    CategoryRepositoryError::DatabaseError(msg)
}

fn model_to_category(model: Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        slug: model.slug,
        description: model.description,
        color: model.color,
        icon: model.icon,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_category).collect())
    }

    async fn create(&self, data: CreateCategoryData) -> Result<Category, CategoryRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            color: Set(data.color),
            icon: Set(data.icon),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_category(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CategoryRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        if let Some(v) = data.name {
            model.name = Set(v);
        }
        if let Some(v) = data.slug {
            model.slug = Set(v);
        }
        if let Some(v) = data.description {
            model.description = Set(v);
        }
        if let Some(v) = data.color {
            model.color = Set(v);
        }
        if let Some(v) = data.icon {
            model.icon = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_category(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::NotFound);
        }
        Ok(())
    }
}
