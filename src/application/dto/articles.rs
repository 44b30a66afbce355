use crate::application::dto::likes::LikeDto;
use crate::application::dto::users::UserDto;
use crate::domain::article::{Article, ArticleDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            description: article.description.into(),
            body: article.body.into(),
            featured_image: article.featured_image,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Fully hydrated projection: article plus resolved author, tag
/// identities, and likes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailsDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub author: UserDto,
    pub tags: Vec<String>,
    pub likes: Vec<LikeDto>,
}

impl From<ArticleDetails> for ArticleDetailsDto {
    fn from(details: ArticleDetails) -> Self {
        Self {
            article: details.article.into(),
            author: details.author.into(),
            tags: details.tags.into_iter().map(Into::into).collect(),
            likes: details.likes.into_iter().map(Into::into).collect(),
        }
    }
}
