use crate::domain::article::entity::{
    Article, ArticleChanges, ArticleDetails, ArticleListFilter, NewArticle,
};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::TagId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Returns the updated row, or `None` when the store reports zero rows
    /// affected (the article vanished under a concurrent delete).
    async fn update(&self, changes: ArticleChanges) -> DomainResult<Option<Article>>;
    /// Deletes the article and, by cascade, its tag associations, likes,
    /// and comments. Returns the number of article rows removed.
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Eager-loads author, tags, and likes in one round trip set.
    async fn find_details(&self, id: ArticleId) -> DomainResult<Option<ArticleDetails>>;
    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<ArticleDetails>>;
    /// Total article count, optionally restricted to one tag; feeds the
    /// caller's pagination header.
    async fn count(&self, tag: Option<&TagId>) -> DomainResult<u64>;
}
