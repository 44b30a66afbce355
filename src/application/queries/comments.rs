// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        comment::CommentRepository,
        user::UserId,
    },
};

pub struct CommentQueryService {
    comments: Arc<dyn CommentRepository>,
    articles: Arc<dyn ArticleReadRepository>,
}

impl CommentQueryService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        articles: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self { comments, articles }
    }

    pub async fn get_for_article(&self, article_id: i64) -> ApplicationResult<Vec<CommentDto>> {
        let id = ArticleId::new(article_id)?;
        if self.articles.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(
                "error",
                "article with the specified id doesn't exist",
            ));
        }

        let comments = self.comments.list_for_article(id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    /// The moderation inbox: every comment posted under any article the
    /// user authored.
    pub async fn list_for_author(&self, author_id: &UserId) -> ApplicationResult<Vec<CommentDto>> {
        let comments = self.comments.list_for_author_articles(author_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
