// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleTitle,
};
use crate::domain::like::Like;
use crate::domain::tag::TagId;
use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub featured_image: Option<String>,
    /// Immutable after creation; ownership checks compare against this.
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    /// None until the first edit.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.author_id == *user_id
    }

    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        description: ArticleDescription,
        body: ArticleBody,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.description = description;
        self.body = body;
        self.updated_at = Some(now);
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub featured_image: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Full-overwrite write model: every field update replaces the stored
/// value, matching the last-write-wins contract. `featured_image` is the
/// exception; `None` keeps the current reference.
#[derive(Debug, Clone)]
pub struct ArticleChanges {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub featured_image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// An article hydrated with everything the projection layer needs:
/// resolved author, tag identities, and the like set.
#[derive(Debug, Clone)]
pub struct ArticleDetails {
    pub article: Article,
    pub author: User,
    pub tags: Vec<TagId>,
    pub likes: Vec<Like>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleSort {
    #[default]
    Unsorted,
    TitleAsc,
    TitleDesc,
    DateAsc,
    DateDesc,
}

impl ArticleSort {
    /// Parses the caller-facing sort keys; unknown keys leave the
    /// storage order untouched, mirroring the original API.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("title") => Self::TitleAsc,
            Some("-title") => Self::TitleDesc,
            Some("date") => Self::DateAsc,
            Some("-date") => Self::DateDesc,
            _ => Self::Unsorted,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub tag: Option<TagId>,
    pub title_prefixes: Vec<String>,
    pub author_id: Option<UserId>,
    pub liked_by: Option<UserId>,
    pub sort: ArticleSort,
    pub page: Option<PageRequest>,
}
