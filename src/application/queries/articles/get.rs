// src/application/queries/articles/get.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, user::Username},
};

impl ArticleQueryService {
    pub async fn get_article(&self, article_id: i64) -> ApplicationResult<ArticleDetailsDto> {
        let id = ArticleId::new(article_id)?;
        let details = self
            .read_repo
            .find_details(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article", "such article does not exist"))?;

        Ok(details.into())
    }

    pub async fn is_liked_by(&self, username: &str, article_id: i64) -> ApplicationResult<bool> {
        let username = Username::new(username)?;
        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", "such user does not exist"))?;

        let id = ArticleId::new(article_id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(
                "article",
                "such article does not exist",
            ));
        }

        Ok(self.likes.find(&user.id, id).await?.is_some())
    }
}
