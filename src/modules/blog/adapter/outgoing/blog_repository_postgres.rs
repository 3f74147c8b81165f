use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts;
use crate::modules::blog::application::domain::entities::{BlogPost, PostStatus};
use crate::modules::blog::application::ports::outgoing::{
    BlogRepository, BlogRepositoryError, CreatePostData, PostFilter, UpdatePostData,
};
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::categories;
use crate::modules::portfolio::application::domain::entities::CategoryRef;

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn hydrate(
        &self,
        models: Vec<blog_posts::Model>,
    ) -> Result<Vec<BlogPost>, BlogRepositoryError> {
        let category_ids: Vec<Uuid> = models.iter().filter_map(|m| m.category_id).collect();

        let category_map: HashMap<Uuid, CategoryRef> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            categories::Entity::find()
                .filter(categories::Column::Id.is_in(category_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|c| {
                    (
                        c.id,
                        CategoryRef {
                            id: c.id,
                            name: c.name,
                            slug: c.slug,
                            color: c.color,
                        },
                    )
                })
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let category = m.category_id.and_then(|id| category_map.get(&id).cloned());
                model_to_post(m, category)
            })
            .collect())
    }

    async fn find_hydrated(&self, id: Uuid) -> Result<BlogPost, BlogRepositoryError> {
        let model = blog_posts::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogRepositoryError::NotFound)?;
        self.hydrate(vec![model])
            .await?
            .pop()
            .ok_or(BlogRepositoryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(e.to_string())
}

fn map_slug_err(e: DbErr) -> BlogRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        return BlogRepositoryError::SlugTaken;
    }
    BlogRepositoryError::DatabaseError(msg)
}

fn model_to_post(model: blog_posts::Model, category: Option<CategoryRef>) -> BlogPost {
    BlogPost {
        id: model.id,
        title: model.title,
        slug: model.slug,
        excerpt: model.excerpt,
        content: model.content,
        author_id: model.author_id,
        category,
        tags: model.tags,
        // Rows only ever hold wire names written by this adapter.
        status: PostStatus::parse(&model.status).unwrap_or(PostStatus::Draft),
        featured_image: model.featured_image,
        meta_title: model.meta_title,
        meta_description: model.meta_description,
        views_count: model.views_count,
        reading_time: model.reading_time,
        published_at: model.published_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn list(&self, filter: PostFilter) -> Result<Vec<BlogPost>, BlogRepositoryError> {
        let public = filter.statuses.is_some();
        let mut query = if public {
            blog_posts::Entity::find().order_by_desc(blog_posts::Column::PublishedAt)
        } else {
            blog_posts::Entity::find().order_by_desc(blog_posts::Column::CreatedAt)
        };

        if let Some(statuses) = &filter.statuses {
            let values: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
            query = query.filter(blog_posts::Column::Status.is_in(values));
        }
        if let Some(tag) = &filter.tag {
            query = query.filter(blog_posts::Column::Tags.contains(tag.trim().to_lowercase()));
        }
        if let Some(slug) = &filter.category_slug {
            let category = categories::Entity::find()
                .filter(categories::Column::Slug.eq(slug.as_str()))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?;
            match category {
                Some(c) => query = query.filter(blog_posts::Column::CategoryId.eq(c.id)),
                None => return Ok(vec![]),
            }
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        self.hydrate(models).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, BlogRepositoryError> {
        let model = blog_posts::Entity::find()
            .filter(blog_posts::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        match model {
            Some(m) => Ok(self.hydrate(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn increment_views(&self, id: Uuid) -> Result<i64, BlogRepositoryError> {
        let result = blog_posts::Entity::update_many()
            .col_expr(
                blog_posts::Column::ViewsCount,
                Expr::col(blog_posts::Column::ViewsCount).add(1),
            )
            .filter(blog_posts::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }

        let model = blog_posts::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogRepositoryError::NotFound)?;
        Ok(model.views_count)
    }

    async fn create(&self, data: CreatePostData) -> Result<BlogPost, BlogRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Some(category_id) = data.category_id {
            let exists = categories::Entity::find_by_id(category_id)
                .one(&txn)
                .await
                .map_err(map_db_err)?;
            if exists.is_none() {
                return Err(BlogRepositoryError::MissingReference(format!(
                    "category {category_id}"
                )));
            }
        }

        let now = Utc::now().fixed_offset();
        let published_at = if data.status.is_public() {
            Some(now)
        } else {
            None
        };
        let model = blog_posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            excerpt: Set(data.excerpt),
            content: Set(data.content),
            author_id: Set(data.author_id),
            category_id: Set(data.category_id),
            tags: Set(data.tags),
            status: Set(data.status.as_str().to_string()),
            featured_image: Set(data.featured_image),
            meta_title: Set(data.meta_title),
            meta_description: Set(data.meta_description),
            views_count: Set(0),
            reading_time: Set(data.reading_time),
            published_at: Set(published_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&txn).await.map_err(map_slug_err)?;
        txn.commit().await.map_err(map_db_err)?;

        self.find_hydrated(inserted.id).await
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdatePostData,
    ) -> Result<BlogPost, BlogRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = blog_posts::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogRepositoryError::NotFound)?;
        let already_published = existing.published_at.is_some();

        let mut model: blog_posts::ActiveModel = existing.into();
        if let Some(v) = data.title {
            model.title = Set(v);
        }
        if let Some(v) = data.slug {
            model.slug = Set(v);
        }
        if let Some(v) = data.excerpt {
            model.excerpt = Set(v);
        }
        if let Some(v) = data.content {
            model.content = Set(v);
        }
        if let Some(v) = data.author_id {
            model.author_id = Set(v);
        }
        if let Some(v) = data.category_id {
            if let Some(category_id) = v {
                let exists = categories::Entity::find_by_id(category_id)
                    .one(&txn)
                    .await
                    .map_err(map_db_err)?;
                if exists.is_none() {
                    return Err(BlogRepositoryError::MissingReference(format!(
                        "category {category_id}"
                    )));
                }
            }
            model.category_id = Set(v);
        }
        if let Some(v) = data.tags {
            model.tags = Set(v);
        }
        if let Some(v) = data.status {
            // First transition into a public status stamps the publish time.
            if v.is_public() && !already_published {
                model.published_at = Set(Some(Utc::now().fixed_offset()));
            }
            model.status = Set(v.as_str().to_string());
        }
        if let Some(v) = data.featured_image {
            model.featured_image = Set(v);
        }
        if let Some(v) = data.meta_title {
            model.meta_title = Set(v);
        }
        if let Some(v) = data.meta_description {
            model.meta_description = Set(v);
        }
        if let Some(v) = data.reading_time {
            model.reading_time = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&txn).await.map_err(map_slug_err)?;
        txn.commit().await.map_err(map_db_err)?;

        self.find_hydrated(updated.id).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError> {
        let result = blog_posts::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }
        Ok(())
    }
}
