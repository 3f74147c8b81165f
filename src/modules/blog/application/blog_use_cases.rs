use std::sync::Arc;

use crate::modules::blog::application::use_cases::get_public_post::IGetPublicPostUseCase;
use crate::modules::blog::application::use_cases::list_posts::{
    IListPostsUseCase, IListPublicPostsUseCase, IRecentPostsUseCase,
};
use crate::modules::blog::application::use_cases::save_post::{
    ICreatePostUseCase, IDeletePostUseCase, IUpdatePostUseCase,
};

/// Wired set of blog-module use cases carried inside `AppState`.
#[derive(Clone)]
pub struct BlogUseCases {
    pub list_posts: Arc<dyn IListPostsUseCase>,
    pub list_public_posts: Arc<dyn IListPublicPostsUseCase>,
    pub recent_posts: Arc<dyn IRecentPostsUseCase>,
    pub get_public_post: Arc<dyn IGetPublicPostUseCase>,
    pub create_post: Arc<dyn ICreatePostUseCase>,
    pub update_post: Arc<dyn IUpdatePostUseCase>,
    pub delete_post: Arc<dyn IDeletePostUseCase>,
}
