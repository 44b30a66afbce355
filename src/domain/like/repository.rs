use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::like::entity::{Like, NewLike};
use crate::domain::tag::InsertOutcome;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn find(&self, user_id: &UserId, article_id: ArticleId) -> DomainResult<Option<Like>>;
    /// Optimistic insert; a duplicate (user, article) pair comes back as
    /// `AlreadyExists` with the stored row, never as an error.
    async fn try_insert(&self, like: NewLike) -> DomainResult<InsertOutcome<Like>>;
    /// Returns the number of rows removed.
    async fn delete(&self, user_id: &UserId, article_id: ArticleId) -> DomainResult<u64>;
}
