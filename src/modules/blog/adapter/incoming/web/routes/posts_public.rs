use actix_web::{get, web, HttpRequest, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::accounts::adapter::incoming::web::activity;
use crate::modules::accounts::application::domain::entities::ActivityAction;
use crate::modules::blog::application::domain::entities::{BlogPost, PostStatus};
use crate::modules::blog::application::ports::outgoing::PostFilter;
use crate::modules::blog::application::use_cases::get_public_post::GetPostError;
use crate::modules::blog::application::use_cases::list_posts::ListPostsError;
use crate::modules::portfolio::application::domain::entities::CategoryRef;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Post as served to clients, with the tag list split out.
#[derive(Serialize, ToSchema)]
pub struct BlogPostDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: Option<Uuid>,
    pub category: Option<CategoryRef>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub featured_image: String,
    pub meta_title: String,
    pub meta_description: String,
    pub views_count: i64,
    pub reading_time: i32,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        let tags = post.tag_list();
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            author_id: post.author_id,
            category: post.category,
            tags,
            status: post.status,
            featured_image: post.featured_image,
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            views_count: post.views_count,
            reading_time: post.reading_time,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

pub fn to_dtos(posts: Vec<BlogPost>) -> Vec<BlogPostDto> {
    posts.into_iter().map(BlogPostDto::from).collect()
}

#[derive(Deserialize)]
pub struct PostQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
}

pub fn query_filter(query: &PostQuery) -> PostFilter {
    PostFilter {
        category_slug: query.category.clone().filter(|s| !s.is_empty()),
        tag: query.tag.clone().filter(|s| !s.is_empty()),
        statuses: None,
        limit: None,
    }
}

/// Published and featured posts, newest first.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    params(
        ("category" = Option<String>, Query, description = "Category slug"),
        ("tag" = Option<String>, Query, description = "Tag")
    ),
    responses((status = 200, description = "Visible posts, newest first"))
)]
#[get("/api/blog")]
pub async fn get_public_posts_handler(
    query: web::Query<PostQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .blog
        .list_public_posts
        .execute(query_filter(&query))
        .await
    {
        Ok(posts) => ApiResponse::success(to_dtos(posts)),
        Err(ListPostsError::RepositoryError(msg)) => {
            error!("Failed to list public posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/blog/recent",
    tag = "blog",
    responses((status = 200, description = "Five most recently published posts"))
)]
#[get("/api/blog/recent")]
pub async fn get_recent_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.recent_posts.execute().await {
        Ok(posts) => ApiResponse::success(to_dtos(posts)),
        Err(ListPostsError::RepositoryError(msg)) => {
            error!("Failed to list recent posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Post detail by slug, bumping the view counter.
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post detail"),
        (status = 404, description = "Unknown or unpublished post")
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_public_post_handler(
    req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    match data.blog.get_public_post.execute(&slug).await {
        Ok(post) => {
            activity::record_public(
                &data.accounts,
                &req,
                ActivityAction::BlogView,
                format!("Viewed post {slug}"),
            )
            .await;
            ApiResponse::success(BlogPostDto::from(post))
        }
        Err(GetPostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "post does not exist")
        }
        Err(GetPostError::RepositoryError(msg)) => {
            error!("Failed to fetch post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::blog::application::use_cases::get_public_post::IGetPublicPostUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct FixedPost;

    #[async_trait]
    impl IGetPublicPostUseCase for FixedPost {
        async fn execute(&self, slug: &str) -> Result<BlogPost, GetPostError> {
            if slug != "taming-lifetimes" {
                return Err(GetPostError::NotFound);
            }
            Ok(BlogPost {
                id: Uuid::new_v4(),
                title: "Taming Lifetimes".to_string(),
                slug: slug.to_string(),
                excerpt: String::new(),
                content: "words".to_string(),
                author_id: None,
                category: None,
                tags: "rust,borrowck".to_string(),
                status: PostStatus::Published,
                featured_image: String::new(),
                meta_title: String::new(),
                meta_description: String::new(),
                views_count: 12,
                reading_time: 4,
                published_at: Some(Utc::now().fixed_offset()),
                created_at: Utc::now().fixed_offset(),
                updated_at: Utc::now().fixed_offset(),
            })
        }
    }

    #[actix_web::test]
    async fn post_detail_splits_tags() {
        let mut builder = TestAppStateBuilder::default();
        builder.blog.get_public_post = Arc::new(FixedPost);
        let state = builder.build();

        let app =
            test::init_service(App::new().app_data(state).service(get_public_post_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/blog/taming-lifetimes")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["tags"], serde_json::json!(["rust", "borrowck"]));
        assert_eq!(body["data"]["views_count"], 12);
    }

    #[actix_web::test]
    async fn unknown_slug_is_not_found() {
        let mut builder = TestAppStateBuilder::default();
        builder.blog.get_public_post = Arc::new(FixedPost);
        let state = builder.build();

        let app =
            test::init_service(App::new().app_data(state).service(get_public_post_handler)).await;

        let req = test::TestRequest::get().uri("/api/blog/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
