// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::ArticleId, user::UserId},
};

impl ArticleCommandService {
    /// Deletion cascades in storage to the article's tag associations,
    /// likes, and comments.
    pub async fn delete_article(
        &self,
        requesting_user_id: &UserId,
        article_id: i64,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(article_id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article", "such article does not exist"))?;

        if !article.is_owned_by(requesting_user_id) {
            return Err(ApplicationError::unauthorized(
                "user",
                "you don't have a permission to do this",
            ));
        }

        let removed = self.write_repo.delete(id).await?;
        if removed == 0 {
            return Err(ApplicationError::persistence(
                "database",
                "couldn't save changes",
            ));
        }

        Ok(())
    }
}
