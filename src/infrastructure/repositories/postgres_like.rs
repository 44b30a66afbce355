// src/infrastructure/repositories/postgres_like.rs
use super::{is_unique_violation, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::like::{Like, LikeRepository, NewLike};
use crate::domain::tag::InsertOutcome;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Debug, FromRow)]
struct LikeRow {
    user_id: String,
    article_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<LikeRow> for Like {
    type Error = DomainError;

    fn try_from(row: LikeRow) -> Result<Self, Self::Error> {
        Ok(Like {
            user_id: UserId::new(row.user_id)?,
            article_id: ArticleId::new(row.article_id)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn find(&self, user_id: &UserId, article_id: ArticleId) -> DomainResult<Option<Like>> {
        let row = sqlx::query_as::<_, LikeRow>(
            "SELECT user_id, article_id, created_at FROM likes
             WHERE user_id = $1 AND article_id = $2",
        )
        .bind(user_id.as_str())
        .bind(i64::from(article_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Like::try_from).transpose()
    }

    async fn try_insert(&self, like: NewLike) -> DomainResult<InsertOutcome<Like>> {
        let result =
            sqlx::query("INSERT INTO likes (user_id, article_id, created_at) VALUES ($1, $2, $3)")
                .bind(like.user_id.as_str())
                .bind(i64::from(like.article_id))
                .bind(like.created_at)
                .execute(&self.pool)
                .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted(Like {
                user_id: like.user_id,
                article_id: like.article_id,
                created_at: like.created_at,
            })),
            Err(err) if is_unique_violation(&err) => {
                let existing = self.find(&like.user_id, like.article_id).await?.ok_or_else(
                    || DomainError::Persistence("like vanished after unique violation".into()),
                )?;
                Ok(InsertOutcome::AlreadyExists(existing))
            }
            Err(err) => Err(map_sqlx(err)),
        }
    }

    async fn delete(&self, user_id: &UserId, article_id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND article_id = $2")
            .bind(user_id.as_str())
            .bind(i64::from(article_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
