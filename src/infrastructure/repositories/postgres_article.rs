// src/infrastructure/repositories/postgres_article.rs
use std::collections::HashMap;

use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleChanges, ArticleDescription, ArticleDetails, ArticleId,
    ArticleListFilter, ArticleReadRepository, ArticleSort, ArticleTitle, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::like::Like;
use crate::domain::tag::TagId;
use crate::domain::user::{User, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "id, title, description, body, featured_image, author_id, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: String,
    body: String,
    featured_image: Option<String>,
    author_id: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description),
            body: ArticleBody::new(row.body)?,
            featured_image: row.featured_image,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    username: String,
    display_name: String,
    profile_image: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            display_name: row.display_name,
            profile_image: row.profile_image,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            body,
            featured_image,
            author_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, description, body, featured_image, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, NULL)
             RETURNING id, title, description, body, featured_image, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(featured_image)
        .bind(author_id.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, changes: ArticleChanges) -> DomainResult<Option<Article>> {
        let ArticleChanges {
            id,
            title,
            description,
            body,
            featured_image,
            updated_at,
        } = changes;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET title = ");
        builder.push_bind(String::from(title));
        builder.push(", description = ");
        builder.push_bind(String::from(description));
        builder.push(", body = ");
        builder.push_bind(String::from(body));
        builder.push(", updated_at = ");
        builder.push_bind(updated_at);

        if let Some(reference) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(reference);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        maybe_row.map(Article::try_from).transpose()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleListFilter) {
        let mut has_where = false;
        let mut prefix = |builder: &mut QueryBuilder<'a, Postgres>| {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                has_where = true;
            }
        };

        if let Some(tag) = &filter.tag {
            prefix(builder);
            builder.push("EXISTS (SELECT 1 FROM article_tags at WHERE at.article_id = articles.id AND at.tag_id = ");
            builder.push_bind(tag.as_str());
            builder.push(")");
        }

        for title in &filter.title_prefixes {
            prefix(builder);
            builder.push("title ILIKE ");
            builder.push_bind(format!("{title}%"));
        }

        if let Some(author_id) = &filter.author_id {
            prefix(builder);
            builder.push("author_id = ");
            builder.push_bind(author_id.as_str());
        }

        if let Some(liked_by) = &filter.liked_by {
            prefix(builder);
            builder.push(
                "EXISTS (SELECT 1 FROM likes l WHERE l.article_id = articles.id AND l.user_id = ",
            );
            builder.push_bind(liked_by.as_str());
            builder.push(")");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: ArticleSort) {
        match sort {
            ArticleSort::TitleAsc => builder.push(" ORDER BY lower(title), id"),
            ArticleSort::TitleDesc => builder.push(" ORDER BY lower(title) DESC, id"),
            ArticleSort::DateAsc => builder.push(" ORDER BY created_at, id"),
            ArticleSort::DateDesc => builder.push(" ORDER BY created_at DESC, id"),
            ArticleSort::Unsorted => builder.push(" ORDER BY id"),
        };
    }

    async fn hydrate(&self, articles: Vec<Article>) -> DomainResult<Vec<ArticleDetails>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let article_ids: Vec<i64> = articles.iter().map(|a| i64::from(a.id)).collect();
        let author_ids: Vec<String> = articles
            .iter()
            .map(|a| a.author_id.as_str().to_string())
            .collect();

        let author_rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, display_name, profile_image, created_at
             FROM users WHERE id = ANY($1)",
        )
        .bind(&author_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut authors = HashMap::new();
        for row in author_rows {
            let user = User::try_from(row)?;
            authors.insert(user.id.as_str().to_string(), user);
        }

        let tag_rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT article_id, tag_id FROM article_tags
             WHERE article_id = ANY($1) ORDER BY tag_id",
        )
        .bind(&article_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut tags_by_article: HashMap<i64, Vec<TagId>> = HashMap::new();
        for (article_id, tag_id) in tag_rows {
            tags_by_article
                .entry(article_id)
                .or_default()
                .push(TagId::new(tag_id)?);
        }

        let like_rows: Vec<(String, i64, DateTime<Utc>)> = sqlx::query_as(
            "SELECT user_id, article_id, created_at FROM likes WHERE article_id = ANY($1)",
        )
        .bind(&article_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut likes_by_article: HashMap<i64, Vec<Like>> = HashMap::new();
        for (user_id, article_id, created_at) in like_rows {
            likes_by_article.entry(article_id).or_default().push(Like {
                user_id: UserId::new(user_id)?,
                article_id: ArticleId::new(article_id)?,
                created_at,
            });
        }

        articles
            .into_iter()
            .map(|article| {
                let author = authors
                    .get(article.author_id.as_str())
                    .cloned()
                    .ok_or_else(|| {
                        DomainError::Persistence(format!(
                            "author {} missing for article {}",
                            article.author_id, article.id
                        ))
                    })?;
                let id = i64::from(article.id);
                Ok(ArticleDetails {
                    author,
                    tags: tags_by_article.remove(&id).unwrap_or_default(),
                    likes: likes_by_article.remove(&id).unwrap_or_default(),
                    article,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, description, body, featured_image, author_id, created_at, updated_at
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_details(&self, id: ArticleId) -> DomainResult<Option<ArticleDetails>> {
        let Some(article) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut hydrated = self.hydrate(vec![article]).await?;
        Ok(hydrated.pop())
    }

    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<ArticleDetails>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(&mut builder, filter);
        Self::apply_ordering(&mut builder, filter.sort);

        if let Some(page) = filter.page {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(page.limit));
            builder.push(" OFFSET ");
            builder.push_bind(i64::from(page.offset));
        }

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        self.hydrate(articles).await
    }

    async fn count(&self, tag: Option<&TagId>) -> DomainResult<u64> {
        let count: i64 = match tag {
            Some(tag) => sqlx::query_scalar(
                "SELECT COUNT(*) FROM articles
                 WHERE EXISTS (SELECT 1 FROM article_tags at
                               WHERE at.article_id = articles.id AND at.tag_id = $1)",
            )
            .bind(tag.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?,
            None => sqlx::query_scalar("SELECT COUNT(*) FROM articles")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?,
        };

        Ok(count.max(0) as u64)
    }
}
