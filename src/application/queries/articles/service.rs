// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, like::LikeRepository, user::UserRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) likes: Arc<dyn LikeRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        users: Arc<dyn UserRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            read_repo,
            users,
            likes,
        }
    }
}
