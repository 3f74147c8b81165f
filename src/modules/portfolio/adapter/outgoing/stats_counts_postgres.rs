use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::technologies;
use crate::modules::portfolio::application::ports::outgoing::{
    StatsCountsRepository, StatsRepositoryError,
};
use crate::modules::service::adapter::outgoing::sea_orm_entity::service_offerings;

#[derive(Clone)]
pub struct StatsCountsPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsCountsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> StatsRepositoryError {
    StatsRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl StatsCountsRepository for StatsCountsPostgres {
    async fn published_post_count(&self) -> Result<i64, StatsRepositoryError> {
        let count = blog_posts::Entity::find()
            .filter(blog_posts::Column::Status.is_in(["published", "featured"]))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }

    async fn active_service_count(&self) -> Result<i64, StatsRepositoryError> {
        let count = service_offerings::Entity::find()
            .filter(service_offerings::Column::IsActive.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }

    async fn technology_count(&self) -> Result<i64, StatsRepositoryError> {
        let count = technologies::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }
}
