use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::testimonial::adapter::outgoing::sea_orm_entity::testimonials;
use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::modules::testimonial::application::ports::outgoing::{
    CreateTestimonialData, TestimonialRepository, TestimonialRepositoryError,
    UpdateTestimonialData,
};

#[derive(Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn check_project<C: sea_orm::ConnectionTrait>(
        conn: &C,
        project_id: Uuid,
    ) -> Result<(), TestimonialRepositoryError> {
        let exists = projects::Entity::find_by_id(project_id)
            .one(conn)
            .await
            .map_err(map_db_err)?;
        if exists.is_none() {
            return Err(TestimonialRepositoryError::MissingReference(format!(
                "project {project_id}"
            )));
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TestimonialRepositoryError {
    TestimonialRepositoryError::DatabaseError(e.to_string())
}

fn model_to_testimonial(model: testimonials::Model) -> Testimonial {
    Testimonial {
        id: model.id,
        client_name: model.client_name,
        client_position: model.client_position,
        client_company: model.client_company,
        client_email: model.client_email,
        client_photo: model.client_photo,
        content: model.content,
        rating: model.rating,
        project_id: model.project_id,
        is_featured: model.is_featured,
        is_approved: model.is_approved,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn list(
        &self,
        only_approved: bool,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
        let mut query = testimonials::Entity::find()
            .order_by_desc(testimonials::Column::IsFeatured)
            .order_by_desc(testimonials::Column::CreatedAt);

        if only_approved {
            query = query.filter(testimonials::Column::IsApproved.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_testimonial).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Testimonial>, TestimonialRepositoryError> {
        let model = testimonials::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_testimonial))
    }

    async fn create(
        &self,
        data: CreateTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        if let Some(project_id) = data.project_id {
            Self::check_project(&*self.db, project_id).await?;
        }

        let now = Utc::now().fixed_offset();
        let model = testimonials::ActiveModel {
            id: Set(Uuid::new_v4()),
            client_name: Set(data.client_name),
            client_position: Set(data.client_position),
            client_company: Set(data.client_company),
            client_email: Set(data.client_email),
            client_photo: Set(data.client_photo),
            content: Set(data.content),
            rating: Set(data.rating),
            project_id: Set(data.project_id),
            is_featured: Set(data.is_featured),
            is_approved: Set(data.is_approved),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_testimonial(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let existing = testimonials::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TestimonialRepositoryError::NotFound)?;

        let mut model: testimonials::ActiveModel = existing.into();
        if let Some(v) = data.client_name {
            model.client_name = Set(v);
        }
        if let Some(v) = data.client_position {
            model.client_position = Set(v);
        }
        if let Some(v) = data.client_company {
            model.client_company = Set(v);
        }
        if let Some(v) = data.client_email {
            model.client_email = Set(v);
        }
        if let Some(v) = data.client_photo {
            model.client_photo = Set(v);
        }
        if let Some(v) = data.content {
            model.content = Set(v);
        }
        if let Some(v) = data.rating {
            model.rating = Set(v);
        }
        if let Some(v) = data.project_id {
            if let Some(project_id) = v {
                Self::check_project(&*self.db, project_id).await?;
            }
            model.project_id = Set(v);
        }
        if let Some(v) = data.is_featured {
            model.is_featured = Set(v);
        }
        if let Some(v) = data.is_approved {
            model.is_approved = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_testimonial(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let result = testimonials::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TestimonialRepositoryError::NotFound);
        }
        Ok(())
    }
}
