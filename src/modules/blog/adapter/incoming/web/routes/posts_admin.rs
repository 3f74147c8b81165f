use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::posts_public::{query_filter, to_dtos, BlogPostDto, PostQuery};
use crate::modules::blog::application::domain::entities::PostStatus;
use crate::modules::blog::application::ports::outgoing::UpdatePostData;
use crate::modules::blog::application::use_cases::list_posts::ListPostsError;
use crate::modules::blog::application::use_cases::save_post::{CreatePostInput, SavePostError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct PostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub tags: String,
    #[serde(default = "default_status")]
    pub status: PostStatus,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchPostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable_uuid")]
    pub author_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "nullable_uuid")]
    pub category_id: Option<Option<Uuid>>,
    pub tags: Option<String>,
    pub status: Option<PostStatus>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

fn default_status() -> PostStatus {
    PostStatus::Draft
}

fn nullable_uuid<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}

fn save_error_response(err: SavePostError) -> actix_web::HttpResponse {
    match err {
        SavePostError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "title must not be blank")
        }
        SavePostError::EmptyContent => {
            ApiResponse::bad_request("EMPTY_CONTENT", "content must not be blank")
        }
        SavePostError::SlugTaken => {
            ApiResponse::conflict("POST_SLUG_TAKEN", "a post with this slug already exists")
        }
        SavePostError::MissingReference(what) => {
            ApiResponse::bad_request("MISSING_REFERENCE", &format!("{what} does not exist"))
        }
        SavePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "post does not exist"),
        SavePostError::RepositoryError(msg) => {
            error!("Post save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/blog")]
pub async fn get_admin_posts_handler(
    query: web::Query<PostQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.list_posts.execute(query_filter(&query)).await {
        Ok(posts) => ApiResponse::success(to_dtos(posts)),
        Err(ListPostsError::RepositoryError(msg)) => {
            error!("Failed to list posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/blog")]
pub async fn create_post_handler(
    body: web::Json<PostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let input = CreatePostInput {
        title: req.title,
        slug: req.slug,
        excerpt: req.excerpt,
        content: req.content,
        author_id: req.author_id,
        category_id: req.category_id,
        tags: req.tags,
        status: req.status,
        featured_image: req.featured_image,
        meta_title: req.meta_title,
        meta_description: req.meta_description,
    };

    match data.blog.create_post.execute(input).await {
        Ok(post) => ApiResponse::created(BlogPostDto::from(post)),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/blog/{id}")]
pub async fn update_post_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdatePostData {
        title: req.title,
        slug: req.slug,
        excerpt: req.excerpt,
        content: req.content,
        author_id: req.author_id,
        category_id: req.category_id,
        tags: req.tags,
        status: req.status,
        featured_image: req.featured_image,
        meta_title: req.meta_title,
        meta_description: req.meta_description,
        reading_time: None,
    };

    match data
        .blog
        .update_post
        .execute(path.into_inner(), update)
        .await
    {
        Ok(post) => ApiResponse::success(BlogPostDto::from(post)),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/blog/{id}")]
pub async fn delete_post_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.delete_post.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SavePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "post does not exist")
        }
        Err(err) => {
            error!("Post delete failed: {:?}", err);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn creates_post_with_derived_fields() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(create_post_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/blog")
            .set_json(json!({
                "title": "Async Pitfalls",
                "content": "one two three",
                "tags": "Rust, Async"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "async-pitfalls");
        assert_eq!(body["data"]["status"], "draft");
        assert_eq!(body["data"]["reading_time"], 1);
        assert_eq!(body["data"]["tags"], json!(["rust", "async"]));
    }

    #[actix_web::test]
    async fn create_rejects_blank_content() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(create_post_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/blog")
            .set_json(json!({"title": "Draft", "content": "  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_CONTENT");
    }
}
