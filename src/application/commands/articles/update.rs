// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDetailsDto,
        error::{ApplicationError, ApplicationResult},
        ports::image::ImageKind,
    },
    domain::{
        article::{ArticleBody, ArticleChanges, ArticleDescription, ArticleId, ArticleTitle},
        tag::parse_tag_list,
        user::UserId,
    },
};
use bytes::Bytes;

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub body: String,
    /// `None` leaves the tag set untouched; `Some` is reconciled in full.
    pub tags: Option<String>,
    pub featured_image: Option<Bytes>,
}

impl ArticleCommandService {
    /// Last write wins: there is no row-version check, only the
    /// ownership gate. A failed authorization leaves the entity
    /// untouched because nothing is written before the check passes.
    pub async fn update_article(
        &self,
        requesting_user_id: &UserId,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDetailsDto> {
        let id = ArticleId::new(command.id)?;
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

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let description = ArticleDescription::new(command.description);
        let now = self.clock.now();

        let featured_image = match command.featured_image {
            Some(data) => Some(self.images.store(data, ImageKind::FeaturedImage).await?),
            None => None,
        };

        self.write_repo
            .update(ArticleChanges {
                id,
                title,
                description,
                body,
                featured_image,
                updated_at: now,
            })
            .await?
            .ok_or_else(|| ApplicationError::persistence("database", "couldn't save changes"))?;

        if let Some(raw) = command.tags.as_deref() {
            let requested = parse_tag_list(raw)?;
            self.reconciler.reconcile(id, &requested).await?;
        }

        let details = self
            .read_repo
            .find_details(id)
            .await?
            .ok_or_else(|| ApplicationError::persistence("database", "couldn't save changes"))?;

        Ok(details.into())
    }
}
