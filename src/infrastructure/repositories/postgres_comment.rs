// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, CommentWithAuthor, ModerationStatus,
    NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str =
    "id, body, author_id, article_id, posted_at, is_accepted, is_rejected";

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    author_id: String,
    article_id: i64,
    posted_at: DateTime<Utc>,
    is_accepted: bool,
    is_rejected: bool,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            article_id: ArticleId::new(row.article_id)?,
            posted_at: row.posted_at,
            status: ModerationStatus::from_flags(row.is_accepted, row.is_rejected),
        })
    }
}

/// Comment joined with its author's profile columns.
#[derive(Debug, FromRow)]
struct CommentAuthorRow {
    id: i64,
    body: String,
    author_id: String,
    article_id: i64,
    posted_at: DateTime<Utc>,
    is_accepted: bool,
    is_rejected: bool,
    username: String,
    display_name: String,
    profile_image: Option<String>,
    author_created_at: DateTime<Utc>,
}

impl TryFrom<CommentAuthorRow> for CommentWithAuthor {
    type Error = DomainError;

    fn try_from(row: CommentAuthorRow) -> Result<Self, Self::Error> {
        let author = User {
            id: UserId::new(row.author_id.clone())?,
            username: Username::new(row.username)?,
            display_name: row.display_name,
            profile_image: row.profile_image,
            created_at: row.author_created_at,
        };
        let comment = Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            article_id: ArticleId::new(row.article_id)?,
            posted_at: row.posted_at,
            status: ModerationStatus::from_flags(row.is_accepted, row.is_rejected),
        };
        Ok(CommentWithAuthor { comment, author })
    }
}

const COMMENT_AUTHOR_SELECT: &str = "SELECT c.id, c.body, c.author_id, c.article_id, c.posted_at,
            c.is_accepted, c.is_rejected,
            u.username, u.display_name, u.profile_image, u.created_at AS author_created_at
     FROM comments c JOIN users u ON u.id = c.author_id";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (body, author_id, article_id, posted_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, body, author_id, article_id, posted_at, is_accepted, is_rejected",
        )
        .bind(comment.body.as_str())
        .bind(comment.author_id.as_str())
        .bind(i64::from(comment.article_id))
        .bind(comment.posted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentAuthorRow>(&format!(
            "{COMMENT_AUTHOR_SELECT} WHERE c.article_id = $1 ORDER BY c.posted_at, c.id"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentWithAuthor::try_from).collect()
    }

    async fn list_for_author_articles(
        &self,
        author_id: &UserId,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentAuthorRow>(&format!(
            "{COMMENT_AUTHOR_SELECT}
             JOIN articles a ON a.id = c.article_id
             WHERE a.author_id = $1 ORDER BY c.posted_at, c.id"
        ))
        .bind(author_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentWithAuthor::try_from).collect()
    }

    async fn set_moderation(
        &self,
        id: CommentId,
        status: ModerationStatus,
    ) -> DomainResult<Option<Comment>> {
        let (is_accepted, is_rejected) = status.flags();
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET is_accepted = $1, is_rejected = $2 WHERE id = $3
             RETURNING id, body, author_id, article_id, posted_at, is_accepted, is_rejected",
        )
        .bind(is_accepted)
        .bind(is_rejected)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
