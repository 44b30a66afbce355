use crate::domain::article::value_objects::ArticleId;
use crate::domain::comment::entity::{
    Comment, CommentId, CommentWithAuthor, ModerationStatus, NewComment,
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// All comments under one article, authors resolved.
    async fn list_for_article(&self, article_id: ArticleId)
    -> DomainResult<Vec<CommentWithAuthor>>;
    /// All comments under any article authored by the given user — the
    /// author's moderation inbox.
    async fn list_for_author_articles(
        &self,
        author_id: &UserId,
    ) -> DomainResult<Vec<CommentWithAuthor>>;
    /// Returns the updated row, or `None` when no row was affected.
    async fn set_moderation(
        &self,
        id: CommentId,
        status: ModerationStatus,
    ) -> DomainResult<Option<Comment>>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: CommentId) -> DomainResult<u64>;
}
