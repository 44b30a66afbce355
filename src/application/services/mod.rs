// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            likes::LikeCommandService, users::UserCommandService,
        },
        ports::{ClockPort, ImageStorePort},
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
        like::LikeRepository,
        tag::{ArticleTagRepository, TagCatalog, TagReconciler, TagRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub like_commands: Arc<LikeCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub user_commands: Arc<UserCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub article_tags: Arc<dyn ArticleTagRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, images: Arc<ImageStorePort>, clock: Arc<ClockPort>) -> Self {
        let reconciler = Arc::new(TagReconciler::new(
            TagCatalog::new(Arc::clone(&repos.tags)),
            Arc::clone(&repos.article_tags),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&reconciler),
            Arc::clone(&images),
            Arc::clone(&clock),
        ));

        let like_commands = Arc::new(LikeCommandService::new(
            Arc::clone(&repos.likes),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&images),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.users),
            Arc::clone(&repos.likes),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_read),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&repos.users)));

        Self {
            article_commands,
            like_commands,
            comment_commands,
            user_commands,
            article_queries,
            comment_queries,
            user_queries,
        }
    }
}
