// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDetailsDto,
        error::{ApplicationError, ApplicationResult},
        ports::image::ImageKind,
    },
    domain::{
        article::{ArticleBody, ArticleDescription, ArticleTitle, NewArticle},
        tag::parse_tag_list,
        user::UserId,
    },
};
use bytes::Bytes;

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    /// Raw comma-delimited tag list; `None` means no tags.
    pub tags: Option<String>,
    pub featured_image: Option<Bytes>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        author_id: &UserId,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDetailsDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let description = ArticleDescription::new(command.description);
        let now = self.clock.now();

        let featured_image = match command.featured_image {
            Some(data) => Some(self.images.store(data, ImageKind::FeaturedImage).await?),
            None => None,
        };

        let created = self
            .write_repo
            .insert(NewArticle {
                title,
                description,
                body,
                featured_image,
                author_id: author_id.clone(),
                created_at: now,
            })
            .await?;

        if let Some(raw) = command.tags.as_deref() {
            let requested = parse_tag_list(raw)?;
            if !requested.is_empty() {
                self.reconciler.reconcile(created.id, &requested).await?;
            }
        }

        // Re-read so the returned payload carries a fully hydrated graph,
        // not the partial in-memory one.
        let details = self.read_repo.find_details(created.id).await?.ok_or_else(|| {
            ApplicationError::persistence("database", "couldn't reload the created article")
        })?;

        Ok(details.into())
    }
}
