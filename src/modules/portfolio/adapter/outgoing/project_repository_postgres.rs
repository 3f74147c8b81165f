use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    categories, project_technologies, projects, technologies,
};
use crate::modules::portfolio::application::domain::entities::{
    CategoryRef, Project, ProjectStatus, ProjectType, TechnologyRef, TypeCount,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CreateProjectData, ProjectFilter, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Batch-loads categories and technologies for a page of projects.
    async fn hydrate(
        &self,
        models: Vec<projects::Model>,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let category_ids: Vec<Uuid> = models.iter().filter_map(|m| m.category_id).collect();
        let project_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

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

        let mut tech_map: HashMap<Uuid, Vec<TechnologyRef>> = HashMap::new();
        if !project_ids.is_empty() {
            let links = project_technologies::Entity::find()
                .filter(project_technologies::Column::ProjectId.is_in(project_ids))
                .order_by_asc(project_technologies::Column::CreatedAt)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            let tech_ids: Vec<Uuid> = links.iter().map(|l| l.technology_id).collect();
            let techs: HashMap<Uuid, technologies::Model> = if tech_ids.is_empty() {
                HashMap::new()
            } else {
                technologies::Entity::find()
                    .filter(technologies::Column::Id.is_in(tech_ids))
                    .all(&*self.db)
                    .await
                    .map_err(map_db_err)?
                    .into_iter()
                    .map(|t| (t.id, t))
                    .collect()
            };

            for link in links {
                if let Some(t) = techs.get(&link.technology_id) {
                    tech_map
                        .entry(link.project_id)
                        .or_default()
                        .push(TechnologyRef {
                            id: t.id,
                            name: t.name.clone(),
                            slug: t.slug.clone(),
                            icon: t.icon.clone(),
                        });
                }
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let category = m.category_id.and_then(|id| category_map.get(&id).cloned());
                let technologies = tech_map.remove(&m.id).unwrap_or_default();
                model_to_project(m, category, technologies)
            })
            .collect())
    }

    async fn link_technologies<C: sea_orm::ConnectionTrait>(
        conn: &C,
        project_id: Uuid,
        technology_ids: &[Uuid],
    ) -> Result<(), ProjectRepositoryError> {
        for tech_id in technology_ids {
            let exists = technologies::Entity::find_by_id(*tech_id)
                .one(conn)
                .await
                .map_err(map_db_err)?;
            if exists.is_none() {
                return Err(ProjectRepositoryError::MissingReference(format!(
                    "technology {tech_id}"
                )));
            }
            let link = project_technologies::ActiveModel {
                id: Set(Uuid::new_v4()),
                project_id: Set(project_id),
                technology_id: Set(*tech_id),
                created_at: Set(Utc::now().fixed_offset()),
            };
            link.insert(conn).await.map_err(map_db_err)?;
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_slug_err(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        return ProjectRepositoryError::SlugTaken;
    }
    ProjectRepositoryError::DatabaseError(msg)
}

fn string_list(value: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

fn model_to_project(
    model: projects::Model,
    category: Option<CategoryRef>,
    technologies: Vec<TechnologyRef>,
) -> Project {
    Project {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        detailed_description: model.detailed_description,
        // Rows only ever hold wire names written by this adapter.
        project_type: ProjectType::parse(&model.project_type).unwrap_or(ProjectType::Other),
        status: ProjectStatus::parse(&model.status).unwrap_or(ProjectStatus::Draft),
        category,
        technologies,
        featured_image: model.featured_image,
        gallery: string_list(&model.gallery),
        live_url: model.live_url,
        github_url: model.github_url,
        documentation_url: model.documentation_url,
        start_date: model.start_date,
        end_date: model.end_date,
        client: model.client,
        team_size: model.team_size,
        key_features: string_list(&model.key_features),
        challenges: model.challenges,
        solutions: model.solutions,
        results: model.results,
        meta_title: model.meta_title,
        meta_description: model.meta_description,
        is_featured: model.is_featured,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

const PUBLIC_STATUSES: [&str; 2] = ["published", "featured"];

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut query = projects::Entity::find().order_by_desc(projects::Column::CreatedAt);

        if let Some(statuses) = &filter.statuses {
            let values: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
            query = query.filter(projects::Column::Status.is_in(values));
        }
        if let Some(project_type) = filter.project_type {
            query = query.filter(projects::Column::ProjectType.eq(project_type.as_str()));
        }
        if let Some(slug) = &filter.category_slug {
            let category = categories::Entity::find()
                .filter(categories::Column::Slug.eq(slug.as_str()))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?;
            match category {
                Some(c) => query = query.filter(projects::Column::CategoryId.eq(c.id)),
                None => return Ok(vec![]),
            }
        }
        if let Some(slug) = &filter.technology_slug {
            let technology = technologies::Entity::find()
                .filter(technologies::Column::Slug.eq(slug.as_str()))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?;
            match technology {
                Some(t) => {
                    let linked: Vec<Uuid> = project_technologies::Entity::find()
                        .filter(project_technologies::Column::TechnologyId.eq(t.id))
                        .all(&*self.db)
                        .await
                        .map_err(map_db_err)?
                        .into_iter()
                        .map(|l| l.project_id)
                        .collect();
                    if linked.is_empty() {
                        return Ok(vec![]);
                    }
                    query = query.filter(projects::Column::Id.is_in(linked));
                }
                None => return Ok(vec![]),
            }
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        self.hydrate(models).await
    }

    async fn featured(&self, limit: u64) -> Result<Vec<Project>, ProjectRepositoryError> {
        let models = projects::Entity::find()
            .filter(projects::Column::IsFeatured.eq(true))
            .filter(projects::Column::Status.is_in(PUBLIC_STATUSES))
            .order_by_desc(projects::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        self.hydrate(models).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        let model = projects::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        match model {
            Some(m) => Ok(self.hydrate(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        let model = projects::Entity::find()
            .filter(projects::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        match model {
            Some(m) => Ok(self.hydrate(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Some(category_id) = data.category_id {
            let exists = categories::Entity::find_by_id(category_id)
                .one(&txn)
                .await
                .map_err(map_db_err)?;
            if exists.is_none() {
                return Err(ProjectRepositoryError::MissingReference(format!(
                    "category {category_id}"
                )));
            }
        }

        let now = Utc::now().fixed_offset();
        let model = projects::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            detailed_description: Set(data.detailed_description),
            project_type: Set(data.project_type.as_str().to_string()),
            status: Set(data.status.as_str().to_string()),
            category_id: Set(data.category_id),
            featured_image: Set(data.featured_image),
            gallery: Set(serde_json::json!(data.gallery)),
            live_url: Set(data.live_url),
            github_url: Set(data.github_url),
            documentation_url: Set(data.documentation_url),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            client: Set(data.client),
            team_size: Set(data.team_size),
            key_features: Set(serde_json::json!(data.key_features)),
            challenges: Set(data.challenges),
            solutions: Set(data.solutions),
            results: Set(data.results),
            meta_title: Set(data.meta_title),
            meta_description: Set(data.meta_description),
            is_featured: Set(data.is_featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&txn).await.map_err(map_slug_err)?;
        Self::link_technologies(&txn, inserted.id, &data.technology_ids).await?;

        txn.commit().await.map_err(map_db_err)?;

        self.find_by_id(inserted.id)
            .await?
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = projects::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut model: projects::ActiveModel = existing.into();
        if let Some(v) = data.title {
            model.title = Set(v);
        }
        if let Some(v) = data.slug {
            model.slug = Set(v);
        }
        if let Some(v) = data.description {
            model.description = Set(v);
        }
        if let Some(v) = data.detailed_description {
            model.detailed_description = Set(v);
        }
        if let Some(v) = data.project_type {
            model.project_type = Set(v.as_str().to_string());
        }
        if let Some(v) = data.status {
            model.status = Set(v.as_str().to_string());
        }
        if let Some(v) = data.category_id {
            if let Some(category_id) = v {
                let exists = categories::Entity::find_by_id(category_id)
                    .one(&txn)
                    .await
                    .map_err(map_db_err)?;
                if exists.is_none() {
                    return Err(ProjectRepositoryError::MissingReference(format!(
                        "category {category_id}"
                    )));
                }
            }
            model.category_id = Set(v);
        }
        if let Some(v) = data.featured_image {
            model.featured_image = Set(v);
        }
        if let Some(v) = data.gallery {
            model.gallery = Set(serde_json::json!(v));
        }
        if let Some(v) = data.live_url {
            model.live_url = Set(v);
        }
        if let Some(v) = data.github_url {
            model.github_url = Set(v);
        }
        if let Some(v) = data.documentation_url {
            model.documentation_url = Set(v);
        }
        if let Some(v) = data.start_date {
            model.start_date = Set(v);
        }
        if let Some(v) = data.end_date {
            model.end_date = Set(v);
        }
        if let Some(v) = data.client {
            model.client = Set(v);
        }
        if let Some(v) = data.team_size {
            model.team_size = Set(v);
        }
        if let Some(v) = data.key_features {
            model.key_features = Set(serde_json::json!(v));
        }
        if let Some(v) = data.challenges {
            model.challenges = Set(v);
        }
        if let Some(v) = data.solutions {
            model.solutions = Set(v);
        }
        if let Some(v) = data.results {
            model.results = Set(v);
        }
        if let Some(v) = data.meta_title {
            model.meta_title = Set(v);
        }
        if let Some(v) = data.meta_description {
            model.meta_description = Set(v);
        }
        if let Some(v) = data.is_featured {
            model.is_featured = Set(v);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&txn).await.map_err(map_slug_err)?;

        if let Some(tech_ids) = data.technology_ids {
            project_technologies::Entity::delete_many()
                .filter(project_technologies::Column::ProjectId.eq(id))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
            Self::link_technologies(&txn, id, &tech_ids).await?;
        }

        txn.commit().await.map_err(map_db_err)?;

        self.find_by_id(updated.id)
            .await?
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = projects::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count_public(&self) -> Result<i64, ProjectRepositoryError> {
        let count = projects::Entity::find()
            .filter(projects::Column::Status.is_in(PUBLIC_STATUSES))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }

    async fn count_featured(&self) -> Result<i64, ProjectRepositoryError> {
        let count = projects::Entity::find()
            .filter(projects::Column::IsFeatured.eq(true))
            .filter(projects::Column::Status.is_in(PUBLIC_STATUSES))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }

    async fn count_by_type(&self) -> Result<Vec<TypeCount>, ProjectRepositoryError> {
        let mut counts = Vec::with_capacity(ProjectType::ALL.len());
        for project_type in ProjectType::ALL {
            let count = projects::Entity::find()
                .filter(projects::Column::ProjectType.eq(project_type.as_str()))
                .filter(projects::Column::Status.is_in(PUBLIC_STATUSES))
                .count(&*self.db)
                .await
                .map_err(map_db_err)?;
            if count > 0 {
                counts.push(TypeCount {
                    project_type,
                    count: count as i64,
                });
            }
        }
        Ok(counts)
    }
}
