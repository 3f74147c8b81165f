use crate::modules::blog::application::domain::entities::{
    reading_time_minutes, BlogPost, PostStatus,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogRepository, BlogRepositoryError, CreatePostData, UpdatePostData,
};
use crate::shared::text::slugify;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SavePostError {
    EmptyTitle,
    EmptyContent,
    SlugTaken,
    MissingReference(String),
    NotFound,
    RepositoryError(String),
}

/// Blog post create payload before slug and reading-time derivation.
#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub tags: String,
    pub status: PostStatus,
    pub featured_image: String,
    pub meta_title: String,
    pub meta_description: String,
}

#[async_trait]
pub trait ICreatePostUseCase: Send + Sync {
    async fn execute(&self, input: CreatePostInput) -> Result<BlogPost, SavePostError>;
}

#[async_trait]
pub trait IUpdatePostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: UpdatePostData) -> Result<BlogPost, SavePostError>;
}

#[async_trait]
pub trait IDeletePostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SavePostError>;
}

pub struct SavePostUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> SavePostUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: BlogRepositoryError) -> SavePostError {
    match e {
        BlogRepositoryError::NotFound => SavePostError::NotFound,
        BlogRepositoryError::SlugTaken => SavePostError::SlugTaken,
        BlogRepositoryError::MissingReference(what) => SavePostError::MissingReference(what),
        BlogRepositoryError::DatabaseError(msg) => SavePostError::RepositoryError(msg),
    }
}

fn normalize_tags(tags: &str) -> String {
    tags.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl<R: BlogRepository> ICreatePostUseCase for SavePostUseCase<R> {
    async fn execute(&self, input: CreatePostInput) -> Result<BlogPost, SavePostError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(SavePostError::EmptyTitle);
        }
        if input.content.trim().is_empty() {
            return Err(SavePostError::EmptyContent);
        }

        let slug = if input.slug.trim().is_empty() {
            slugify(&title)
        } else {
            slugify(&input.slug)
        };
        let reading_time = reading_time_minutes(&input.content);

        self.repository
            .create(CreatePostData {
                title,
                slug,
                excerpt: input.excerpt,
                content: input.content,
                author_id: input.author_id,
                category_id: input.category_id,
                tags: normalize_tags(&input.tags),
                status: input.status,
                featured_image: input.featured_image,
                meta_title: input.meta_title,
                meta_description: input.meta_description,
                reading_time,
            })
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: BlogRepository> IUpdatePostUseCase for SavePostUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        mut data: UpdatePostData,
    ) -> Result<BlogPost, SavePostError> {
        if matches!(data.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(SavePostError::EmptyTitle);
        }
        if matches!(data.content.as_deref(), Some(c) if c.trim().is_empty()) {
            return Err(SavePostError::EmptyContent);
        }
        if let Some(slug) = data.slug.as_deref() {
            data.slug = Some(slugify(slug));
        }
        if let Some(tags) = data.tags.as_deref() {
            data.tags = Some(normalize_tags(tags));
        }
        if let Some(content) = data.content.as_deref() {
            data.reading_time = Some(reading_time_minutes(content));
        }

        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: BlogRepository> IDeletePostUseCase for SavePostUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SavePostError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
