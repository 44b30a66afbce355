// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        comment::{CommentBody, CommentId, CommentRepository, CommentWithAuthor, ModerationStatus},
        user::{UserId, UserRepository},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModerationVerdict {
    Accept,
    Reject,
}

impl From<ModerationVerdict> for ModerationStatus {
    fn from(verdict: ModerationVerdict) -> Self {
        match verdict {
            ModerationVerdict::Accept => Self::Accepted,
            ModerationVerdict::Reject => Self::Rejected,
        }
    }
}

pub struct CommentCommandService {
    comments: Arc<dyn CommentRepository>,
    articles: Arc<dyn ArticleReadRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<ClockPort>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            comments,
            articles,
            users,
            clock,
        }
    }

    /// Missing article/author are keyed not-found errors like every other
    /// operation, so callers never branch on a bare boolean.
    pub async fn add_comment(
        &self,
        author_id: &UserId,
        article_id: i64,
        body: String,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(article_id)?;
        let body = CommentBody::new(body)?;

        if self.articles.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found(
                "article",
                "such article does not exist",
            ));
        }

        let author = self
            .users
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", "such user does not exist"))?;

        let comment = self
            .comments
            .insert(crate::domain::comment::NewComment {
                body,
                author_id: author_id.clone(),
                article_id,
                posted_at: self.clock.now(),
            })
            .await?;

        Ok(CommentWithAuthor { comment, author }.into())
    }

    /// Deletable by the comment's author or by the owning article's
    /// author; nobody else.
    pub async fn remove_comment(
        &self,
        requesting_user_id: &UserId,
        comment_id: i64,
    ) -> ApplicationResult<()> {
        let id = CommentId::new(comment_id)?;
        let comment = self.comments.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::not_found("comment", "comment with this id does not exist")
        })?;

        if comment.author_id != *requesting_user_id {
            self.ensure_article_owner(comment.article_id, requesting_user_id)
                .await?;
        }

        let removed = self.comments.delete(id).await?;
        if removed == 0 {
            return Err(ApplicationError::persistence(
                "database",
                "couldn't persist changes",
            ));
        }

        Ok(())
    }

    /// Accept or reject a pending comment. Only the owning article's
    /// author moderates their own page.
    pub async fn moderate_comment(
        &self,
        requesting_user_id: &UserId,
        comment_id: i64,
        verdict: ModerationVerdict,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(comment_id)?;
        let comment = self.comments.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::not_found("comment", "comment with this id does not exist")
        })?;

        self.ensure_article_owner(comment.article_id, requesting_user_id)
            .await?;

        let updated = self
            .comments
            .set_moderation(id, verdict.into())
            .await?
            .ok_or_else(|| ApplicationError::persistence("database", "couldn't persist changes"))?;

        let author = self
            .users
            .find_by_id(&updated.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", "such user does not exist"))?;

        Ok(CommentWithAuthor {
            comment: updated,
            author,
        }
        .into())
    }

    async fn ensure_article_owner(
        &self,
        article_id: ArticleId,
        user_id: &UserId,
    ) -> ApplicationResult<()> {
        let owns = self
            .articles
            .find_by_id(article_id)
            .await?
            .is_some_and(|article| article.is_owned_by(user_id));

        if owns {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized(
                "user",
                "you don't have a permission to do this",
            ))
        }
    }
}
