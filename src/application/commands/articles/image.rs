// src/application/commands/articles/image.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDetailsDto,
        error::{ApplicationError, ApplicationResult},
        ports::image::ImageKind,
    },
    domain::{
        article::{ArticleChanges, ArticleId},
        user::UserId,
    },
};
use bytes::Bytes;

impl ArticleCommandService {
    /// Replaces the featured image: the upload collaborator stores the
    /// bytes, the article keeps only the returned reference. Counts as an
    /// edit, so `updated_at` moves.
    pub async fn set_featured_image(
        &self,
        requesting_user_id: &UserId,
        article_id: i64,
        data: Bytes,
    ) -> ApplicationResult<ArticleDetailsDto> {
        let id = ArticleId::new(article_id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article", "such article does not exist"))?;

        if !article.is_owned_by(requesting_user_id) {
            return Err(ApplicationError::unauthorized(
                "user",
                "this article is not owned by the requesting user",
            ));
        }

        let reference = self.images.store(data, ImageKind::FeaturedImage).await?;
        let now = self.clock.now();

        self.write_repo
            .update(ArticleChanges {
                id,
                title: article.title,
                description: article.description,
                body: article.body,
                featured_image: Some(reference),
                updated_at: now,
            })
            .await?
            .ok_or_else(|| ApplicationError::persistence("database", "couldn't save changes"))?;

        let details = self
            .read_repo
            .find_details(id)
            .await?
            .ok_or_else(|| ApplicationError::persistence("database", "couldn't save changes"))?;

        Ok(details.into())
    }
}
