// src/infrastructure/repositories/postgres_tag.rs
use super::{is_unique_violation, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{ArticleTag, ArticleTagRepository, InsertOutcome, Tag, TagId, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: &TagId) -> DomainResult<Option<Tag>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT id FROM tags WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|(id,)| TagId::new(id).map(|id| Tag { id })).transpose()
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find(&self, id: &TagId) -> DomainResult<Option<Tag>> {
        self.fetch(id).await
    }

    async fn try_insert(&self, id: &TagId) -> DomainResult<InsertOutcome<Tag>> {
        let result = sqlx::query("INSERT INTO tags (id) VALUES ($1)")
            .bind(id.as_str())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted(Tag { id: id.clone() })),
            Err(err) if is_unique_violation(&err) => {
                // Lost the race: a concurrent writer created the tag.
                // Tags are never deleted, so the re-read must find it.
                let existing = self.fetch(id).await?.ok_or_else(|| {
                    DomainError::Persistence(format!("tag '{id}' vanished after unique violation"))
                })?;
                Ok(InsertOutcome::AlreadyExists(existing))
            }
            Err(err) => Err(map_sqlx(err)),
        }
    }
}

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    article_id: i64,
    tag_id: String,
}

impl TryFrom<ArticleTagRow> for ArticleTag {
    type Error = DomainError;

    fn try_from(row: ArticleTagRow) -> Result<Self, Self::Error> {
        Ok(ArticleTag {
            article_id: ArticleId::new(row.article_id)?,
            tag_id: TagId::new(row.tag_id)?,
        })
    }
}

#[derive(Clone)]
pub struct PostgresArticleTagRepository {
    pool: PgPool,
}

impl PostgresArticleTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleTagRepository for PostgresArticleTagRepository {
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleTag>> {
        let rows = sqlx::query_as::<_, ArticleTagRow>(
            "SELECT article_id, tag_id FROM article_tags WHERE article_id = $1 ORDER BY tag_id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleTag::try_from).collect()
    }

    async fn try_insert(&self, link: ArticleTag) -> DomainResult<InsertOutcome<ArticleTag>> {
        let result = sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)")
            .bind(i64::from(link.article_id))
            .bind(link.tag_id.as_str())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted(link)),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::AlreadyExists(link)),
            Err(err) => Err(map_sqlx(err)),
        }
    }

    async fn delete(&self, article_id: ArticleId, tag_id: &TagId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1 AND tag_id = $2")
            .bind(i64::from(article_id))
            .bind(tag_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
