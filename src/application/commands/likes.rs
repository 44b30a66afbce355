// src/application/commands/likes.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::LikeDto,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        like::{LikeRepository, NewLike},
        tag::InsertOutcome,
        user::{UserId, UserRepository},
    },
};

pub struct LikeCommandService {
    likes: Arc<dyn LikeRepository>,
    articles: Arc<dyn ArticleReadRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<ClockPort>,
}

impl LikeCommandService {
    pub fn new(
        likes: Arc<dyn LikeRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            likes,
            articles,
            users,
            clock,
        }
    }

    /// Clients retry this redundantly; losing the uniqueness race is an
    /// expected outcome and comes back as a `like`-keyed conflict, never
    /// a crash or a duplicate row.
    pub async fn add_like(&self, user_id: &UserId, article_id: i64) -> ApplicationResult<LikeDto> {
        let article_id = self.ensure_pair_exists(user_id, article_id).await?;

        let outcome = self
            .likes
            .try_insert(NewLike {
                user_id: user_id.clone(),
                article_id,
                created_at: self.clock.now(),
            })
            .await?;

        match outcome {
            InsertOutcome::Inserted(like) => Ok(like.into()),
            InsertOutcome::AlreadyExists(_) => {
                Err(ApplicationError::conflict("like", "like already exists"))
            }
        }
    }

    pub async fn remove_like(&self, user_id: &UserId, article_id: i64) -> ApplicationResult<()> {
        let article_id = self.ensure_pair_exists(user_id, article_id).await?;

        if self.likes.find(user_id, article_id).await?.is_none() {
            return Err(ApplicationError::not_found(
                "like",
                "like by this user does not exist",
            ));
        }

        let removed = self.likes.delete(user_id, article_id).await?;
        if removed == 0 {
            return Err(ApplicationError::persistence(
                "database",
                "couldn't persist changes",
            ));
        }

        Ok(())
    }

    async fn ensure_pair_exists(
        &self,
        user_id: &UserId,
        article_id: i64,
    ) -> ApplicationResult<ArticleId> {
        let article_id = ArticleId::new(article_id)?;

        if self.articles.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found(
                "article",
                "such article does not exist",
            ));
        }

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApplicationError::not_found(
                "user",
                "such user does not exist",
            ));
        }

        Ok(article_id)
    }
}
