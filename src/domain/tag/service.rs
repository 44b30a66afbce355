// src/domain/tag/service.rs
use std::sync::Arc;

use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{ArticleTag, Tag, TagId};
use crate::domain::tag::reconcile::TagDelta;
use crate::domain::tag::repository::{ArticleTagRepository, TagRepository};

/// Race-safe get-or-create over the append-only tag catalog.
pub struct TagCatalog {
    tags: Arc<dyn TagRepository>,
}

impl TagCatalog {
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self { tags }
    }

    /// Idempotent from the caller's point of view: "already exists" is
    /// never an error, only genuine I/O failure is. When the insert loses
    /// a race, the adapter has already re-read the winning row; since tags
    /// are never deleted, that row is the correct result.
    pub async fn get_or_create(&self, id: &TagId) -> DomainResult<Tag> {
        if let Some(tag) = self.tags.find(id).await? {
            return Ok(tag);
        }
        let outcome = self.tags.try_insert(id).await?;
        Ok(outcome.into_inner())
    }
}

/// Converges an article's tag associations onto a requested tag set.
pub struct TagReconciler {
    catalog: TagCatalog,
    article_tags: Arc<dyn ArticleTagRepository>,
}

impl TagReconciler {
    pub fn new(catalog: TagCatalog, article_tags: Arc<dyn ArticleTagRepository>) -> Self {
        Self {
            catalog,
            article_tags,
        }
    }

    /// Removal runs before addition so the "already has" check always
    /// sees post-removal state. Associations for tags present in both
    /// sets are left untouched, not deleted and recreated.
    pub async fn reconcile(
        &self,
        article_id: ArticleId,
        requested: &[TagId],
    ) -> DomainResult<Vec<ArticleTag>> {
        let current = self.article_tags.list_for_article(article_id).await?;
        let delta = TagDelta::between(&current, requested);

        if delta.is_empty() {
            return Ok(current);
        }

        for tag_id in &delta.to_remove {
            self.article_tags.delete(article_id, tag_id).await?;
        }

        for tag_id in &delta.to_add {
            let tag = self.catalog.get_or_create(tag_id).await?;
            // A concurrent writer may have linked the same tag; the
            // adapter folds that into AlreadyExists.
            self.article_tags
                .try_insert(ArticleTag {
                    article_id,
                    tag_id: tag.id,
                })
                .await?;
        }

        self.article_tags.list_for_article(article_id).await
    }
}
