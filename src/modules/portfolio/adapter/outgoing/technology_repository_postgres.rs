use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::technologies::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::portfolio::application::domain::entities::Technology;
use crate::modules::portfolio::application::ports::outgoing::{
    CreateTechnologyData, TechnologyRepository, TechnologyRepositoryError, UpdateTechnologyData,
};

#[derive(Clone)]
pub struct TechnologyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechnologyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TechnologyRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        return TechnologyRepositoryError::NameTaken;
    }
    TechnologyRepositoryError::DatabaseError(msg)
}

fn model_to_technology(model: Model) -> Technology {
    Technology {
        id: model.id,
        name: model.name,
        slug: model.slug,
        description: model.description,
        icon: model.icon,
        website_url: model.website_url,
        proficiency: model.proficiency,
        years_experience: model.years_experience,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl TechnologyRepository for TechnologyRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Technology>, TechnologyRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::Proficiency)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_technology).collect())
    }

    async fn top_skills(
        &self,
        min_proficiency: i16,
        limit: u64,
    ) -> Result<Vec<Technology>, TechnologyRepositoryError> {
        let models = Entity::find()
            .filter(Column::Proficiency.gte(min_proficiency))
            .order_by_desc(Column::Proficiency)
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_technology).collect())
    }

    async fn create(
        &self,
        data: CreateTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            icon: Set(data.icon),
            website_url: Set(data.website_url),
            proficiency: Set(data.proficiency),
            years_experience: Set(data.years_experience),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_technology(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TechnologyRepositoryError::NotFound)?;

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
        if let Some(v) = data.icon {
            model.icon = Set(v);
        }
        if let Some(v) = data.website_url {
            model.website_url = Set(v);
        }
        if let Some(v) = data.proficiency {
            model.proficiency = Set(v);
        }
        if let Some(v) = data.years_experience {
            model.years_experience = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_technology(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TechnologyRepositoryError::NotFound);
        }
        Ok(())
    }
}
