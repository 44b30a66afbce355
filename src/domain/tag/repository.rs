use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{ArticleTag, Tag, TagId};
use async_trait::async_trait;

/// Outcome of an optimistic insert against a uniqueness constraint.
/// Losing the race is a normal result, not an error: the adapter detects
/// the store's unique-violation signal and re-reads the winning row, so
/// callers branch on this enum instead of inspecting error internals.
#[derive(Debug, Clone)]
pub enum InsertOutcome<T> {
    Inserted(T),
    AlreadyExists(T),
}

impl<T> InsertOutcome<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Inserted(value) | Self::AlreadyExists(value) => value,
        }
    }
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find(&self, id: &TagId) -> DomainResult<Option<Tag>>;
    /// Persists immediately so concurrent callers observe the row.
    async fn try_insert(&self, id: &TagId) -> DomainResult<InsertOutcome<Tag>>;
}

#[async_trait]
pub trait ArticleTagRepository: Send + Sync {
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleTag>>;
    async fn try_insert(&self, link: ArticleTag) -> DomainResult<InsertOutcome<ArticleTag>>;
    async fn delete(&self, article_id: ArticleId, tag_id: &TagId) -> DomainResult<()>;
}
